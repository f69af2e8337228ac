use std::path::PathBuf;

use crate::grid::Precision;

#[derive(Debug)]
pub enum GridError {
    InvalidPrecision {
        tag: String,
    },
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
        gridsize: usize,
        precision: Precision,
    },
    NonCubicGrid {
        gridsize: usize,
        cells: usize,
    },
    NonIntegerRatio {
        input: usize,
        output: usize,
    },
    InvalidRatio {
        input: usize,
        output: usize,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Other(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrecision { tag } => write!(
                f,
                "unsupported precision '{tag}' (accepted values: int32, float32, float64)"
            ),
            Self::SizeMismatch {
                path,
                expected,
                actual,
                gridsize,
                precision,
            } => write!(
                f,
                "'{}' is {actual} bytes but a {gridsize}^3 grid of {} cells needs exactly {expected}",
                path.display(),
                precision.name()
            ),
            Self::NonCubicGrid { gridsize, cells } => write!(
                f,
                "grid claims gridsize {gridsize} but holds {cells} cells; the grid must be cubic"
            ),
            Self::NonIntegerRatio { input, output } => write!(
                f,
                "output gridsize {output} must divide input gridsize {input} exactly"
            ),
            Self::InvalidRatio { input, output } => write!(
                f,
                "cannot subsample gridsize {input} to {output}; the output gridsize must be between 1 and {input}"
            ),
            Self::Io { path, source } => {
                write!(f, "I/O failure on '{}': {source}", path.display())
            }
            Self::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<&str> for GridError {
    fn from(value: &str) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<String> for GridError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}
