/// On-disk element kind of a grid file. In memory every cell is held as f64;
/// the precision tag only decides how cells are decoded and encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Int32,
    Float32,
    Float64,
}

impl Precision {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "int" | "int32" => Some(Self::Int32),
            "float" | "float32" => Some(Self::Float32),
            "double" | "float64" => Some(Self::Float64),
            _ => None,
        }
    }

    pub fn width(self) -> usize {
        match self {
            Self::Int32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    pub fn decode(self, bytes: &[u8]) -> f64 {
        match self {
            Self::Int32 => i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64,
            Self::Float32 => f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64,
            Self::Float64 => {
                let mut arr = [0u8; 8];
                arr.copy_from_slice(&bytes[0..8]);
                f64::from_le_bytes(arr)
            }
        }
    }

    pub fn encode(self, value: f64, out: &mut Vec<u8>) {
        match self {
            Self::Int32 => out.extend_from_slice(&(value as i32).to_le_bytes()),
            Self::Float32 => out.extend_from_slice(&(value as f32).to_le_bytes()),
            Self::Float64 => out.extend_from_slice(&value.to_le_bytes()),
        }
    }
}

/// Cubic 3D grid in dense row-major order: x varies slowest, z is contiguous.
/// `data.len()` always equals `gridsize^3`.
#[derive(Debug, Clone)]
pub struct Grid {
    pub gridsize: usize,
    pub precision: Precision,
    pub data: Vec<f64>,
}

pub fn cell_count(gridsize: usize) -> Option<usize> {
    gridsize.checked_mul(gridsize)?.checked_mul(gridsize)
}
