use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::grid::{self, Grid, Precision};

/// Per-cell tolerance when comparing a fresh reduction against a stored
/// reference grid.
pub const TOLERANCE: f64 = 1e-6;

const MAGIC: &[u8; 8] = b"GRIDREF1";

/// Archive file name for a reduction keyed by gridsizes and RNG seed.
pub fn archive_name(input_gridsize: usize, output_gridsize: usize, seed: u64) -> String {
    format!("known_grid_in{input_gridsize}_out{output_gridsize}_seed{seed}.grid")
}

/// Stores an accepted output grid: magic, gridsize, then the raw f64 buffer.
pub fn save(path: &Path, grid: &Grid) -> Result<(), GridError> {
    let mut bytes = Vec::with_capacity(16 + grid.data.len() * 8);
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&(grid.gridsize as u64).to_le_bytes());
    for &value in &grid.data {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    fs::write(path, &bytes).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load(path: &Path) -> Result<Grid, GridError> {
    let bytes = fs::read(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.len() < 16 || &bytes[..8] != MAGIC {
        return Err(GridError::from(format!(
            "'{}' is not a reference grid archive",
            path.display()
        )));
    }

    let mut arr = [0_u8; 8];
    arr.copy_from_slice(&bytes[8..16]);
    let gridsize = u64::from_le_bytes(arr) as usize;

    let cells = grid::cell_count(gridsize)
        .ok_or_else(|| GridError::from(format!("cell count overflow for gridsize {gridsize}")))?;
    let expected = cells
        .checked_mul(8)
        .and_then(|n| n.checked_add(16))
        .ok_or_else(|| GridError::from(format!("byte count overflow for gridsize {gridsize}")))?;
    if bytes.len() != expected {
        return Err(GridError::from(format!(
            "reference archive '{}' holds {} bytes, expected {expected} for gridsize {gridsize}",
            path.display(),
            bytes.len()
        )));
    }

    let mut data = Vec::with_capacity(cells);
    for chunk in bytes[16..].chunks_exact(8) {
        arr.copy_from_slice(chunk);
        data.push(f64::from_le_bytes(arr));
    }

    Ok(Grid {
        gridsize,
        precision: Precision::Float64,
        data,
    })
}

/// Largest per-cell difference between two grids, or None when the shapes
/// disagree and a comparison is meaningless.
pub fn max_abs_diff(a: &Grid, b: &Grid) -> Option<f64> {
    if a.gridsize != b.gridsize || a.data.len() != b.data.len() {
        return None;
    }
    let mut max = 0.0_f64;
    for (&x, &y) in a.data.iter().zip(&b.data) {
        max = max.max((x - y).abs());
    }
    Some(max)
}
