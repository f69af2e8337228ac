use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GridError;
use crate::grid::{self, Grid, Precision};

fn fill_random(rng: &mut impl Rng, cells: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(cells);
    for _ in 0..cells {
        data.push(rng.random::<f64>());
    }
    data
}

/// Builds a grid of uniform random values in [0, 1). A seed makes the grid
/// reproducible; without one the thread RNG decides. Generator state is
/// explicit here rather than a process-wide seed.
pub fn random_grid(
    gridsize: usize,
    precision: Precision,
    seed: Option<u64>,
) -> Result<Grid, GridError> {
    let cells = grid::cell_count(gridsize)
        .ok_or_else(|| GridError::from(format!("cell count overflow for gridsize {gridsize}")))?;
    let data = match seed {
        Some(seed) => fill_random(&mut StdRng::seed_from_u64(seed), cells),
        None => fill_random(&mut rand::rng(), cells),
    };
    Ok(Grid {
        gridsize,
        precision,
        data,
    })
}
