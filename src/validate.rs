use crate::error::GridError;
use crate::grid::{self, Grid};

/// Checks a gridsize pair before any cell data exists and returns the
/// conversion factor `input / output`. This is a subsampler: the output grid
/// must be no larger than the input and must divide it exactly.
pub fn check_ratio(input_gridsize: usize, output_gridsize: usize) -> Result<usize, GridError> {
    if output_gridsize == 0 || output_gridsize > input_gridsize {
        return Err(GridError::InvalidRatio {
            input: input_gridsize,
            output: output_gridsize,
        });
    }
    if input_gridsize % output_gridsize != 0 {
        return Err(GridError::NonIntegerRatio {
            input: input_gridsize,
            output: output_gridsize,
        });
    }
    Ok(input_gridsize / output_gridsize)
}

/// Re-validation at the engine boundary. The cubic invariant holds by
/// construction, but the engine indexes by gridsize and a stale cell count
/// here would read out of bounds.
pub fn check_reduction(input: &Grid, output_gridsize: usize) -> Result<usize, GridError> {
    let cells = grid::cell_count(input.gridsize).ok_or_else(|| {
        GridError::from(format!("cell count overflow for gridsize {}", input.gridsize))
    })?;
    if input.data.len() != cells {
        return Err(GridError::NonCubicGrid {
            gridsize: input.gridsize,
            cells: input.data.len(),
        });
    }
    check_ratio(input.gridsize, output_gridsize)
}
