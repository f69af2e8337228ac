use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::grid::{self, Grid, Precision};

/// Reads a flat binary grid file: `gridsize^3` little-endian elements of the
/// declared precision in row-major order. The file length must match exactly;
/// there is no truncation tolerance and no streaming mode.
pub fn read_grid(path: &Path, gridsize: usize, precision: Precision) -> Result<Grid, GridError> {
    let cells = grid::cell_count(gridsize)
        .ok_or_else(|| GridError::from(format!("cell count overflow for gridsize {gridsize}")))?;
    let expected = cells
        .checked_mul(precision.width())
        .ok_or_else(|| GridError::from(format!("byte count overflow for gridsize {gridsize}")))?;

    let bytes = fs::read(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.len() != expected {
        return Err(GridError::SizeMismatch {
            path: path.to_path_buf(),
            expected: expected as u64,
            actual: bytes.len() as u64,
            gridsize,
            precision,
        });
    }

    let mut data = Vec::with_capacity(cells);
    for chunk in bytes.chunks_exact(precision.width()) {
        data.push(precision.decode(chunk));
    }

    Ok(Grid {
        gridsize,
        precision,
        data,
    })
}

/// Writes the grid back out in the same flat row-major layout, encoded at the
/// grid's own precision. A failed write surfaces unmodified; no temp-file
/// protocol, so a partial file may be left behind.
pub fn write_grid(path: &Path, grid: &Grid) -> Result<(), GridError> {
    let mut bytes = Vec::with_capacity(grid.data.len() * grid.precision.width());
    for &value in &grid.data {
        grid.precision.encode(value, &mut bytes);
    }
    fs::write(path, &bytes).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gridsub_{}_{name}", std::process::id()))
    }

    #[test]
    fn rejects_a_file_of_the_wrong_size() {
        let path = temp_path("short.grid");
        fs::write(&path, vec![0_u8; 4000]).unwrap();
        let err = read_grid(&path, 10, Precision::Float64).unwrap_err();
        fs::remove_file(&path).ok();
        match err {
            GridError::SizeMismatch {
                expected: 8000,
                actual: 4000,
                gridsize: 10,
                ..
            } => {}
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_failure() {
        let path = temp_path("does_not_exist.grid");
        match read_grid(&path, 4, Precision::Float32) {
            Err(GridError::Io { .. }) => {}
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn round_trips_each_precision() {
        for &precision in &[Precision::Int32, Precision::Float32, Precision::Float64] {
            let grid = Grid {
                gridsize: 3,
                precision,
                data: (0..27).map(f64::from).collect(),
            };
            let path = temp_path(&format!("roundtrip_{}.grid", precision.name()));
            write_grid(&path, &grid).unwrap();

            let meta = fs::metadata(&path).unwrap();
            assert_eq!(meta.len(), (27 * precision.width()) as u64);

            let reread = read_grid(&path, 3, precision).unwrap();
            fs::remove_file(&path).ok();
            assert_eq!(reread.precision, precision);
            assert_eq!(reread.data, grid.data);
        }
    }
}
