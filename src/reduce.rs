use rayon::prelude::*;

use crate::error::GridError;
use crate::grid::{Grid, Precision};
use crate::validate;

/// Mean-reduces `input` onto an `output_gridsize`^3 grid: each output cell is
/// the arithmetic mean of the corresponding non-overlapping k x k x k block
/// of input cells, with `k = input.gridsize / output_gridsize`.
///
/// The block sums come from a separable sliding sum over the whole input
/// (three 1D moving-window passes, one per axis) with periodic wrap, sampled
/// at block-aligned offsets only. Because the window width equals the
/// sampling stride, wrapped values never reach a sampled cell; the wrap is
/// still required, since sampling at non-aligned offsets would depend on it.
/// Do not swap it for zero padding or edge clamping.
pub fn subsample_grid(input: &Grid, output_gridsize: usize) -> Result<Grid, GridError> {
    let conversion = validate::check_reduction(input, output_gridsize)?;
    let n = input.gridsize;
    let m = output_gridsize;

    if conversion == 1 {
        return Ok(Grid {
            gridsize: m,
            precision: Precision::Float64,
            data: input.data.clone(),
        });
    }

    // Ping-pong between two full-size f64 volumes across the axis passes.
    let mut sums = vec![0.0_f64; input.data.len()];
    moving_sum_z(&input.data, &mut sums, n, conversion);
    let mut back = vec![0.0_f64; input.data.len()];
    moving_sum_y(&sums, &mut back, n, conversion);
    moving_sum_x(&back, &mut sums, n, conversion);

    // Read every conversion-th cell of the sliding sum and normalize the
    // block sum into a block mean.
    let norm = (conversion * conversion * conversion) as f64;
    let mut data = vec![0.0_f64; m * m * m];
    data.par_chunks_mut(m * m)
        .enumerate()
        .for_each(|(i, slab)| {
            let x = i * conversion;
            for j in 0..m {
                let y = j * conversion;
                for l in 0..m {
                    let z = l * conversion;
                    slab[j * m + l] = sums[(x * n + y) * n + z] / norm;
                }
            }
        });

    Ok(Grid {
        gridsize: m,
        precision: Precision::Float64,
        data,
    })
}

/// Moving-window sum of width `k` along the contiguous z axis:
/// `dst[x][y][i] = sum over d of src[x][y][(i + d) mod n]`.
fn moving_sum_z(src: &[f64], dst: &mut [f64], n: usize, k: usize) {
    dst.par_chunks_mut(n)
        .zip(src.par_chunks(n))
        .for_each(|(drow, srow)| {
            let mut acc: f64 = srow[..k].iter().sum();
            drow[0] = acc;
            for i in 1..n {
                acc += srow[(i + k - 1) % n] - srow[i - 1];
                drow[i] = acc;
            }
        });
}

/// Same window along the y axis (stride n), one x slab at a time. A row of
/// accumulators keeps the inner loop on contiguous memory.
fn moving_sum_y(src: &[f64], dst: &mut [f64], n: usize, k: usize) {
    let plane = n * n;
    dst.par_chunks_mut(plane)
        .zip(src.par_chunks(plane))
        .for_each(|(dslab, sslab)| {
            let mut acc = vec![0.0_f64; n];
            for y in 0..k {
                let srow = &sslab[y * n..][..n];
                for z in 0..n {
                    acc[z] += srow[z];
                }
            }
            dslab[..n].copy_from_slice(&acc);
            for y in 1..n {
                let add = &sslab[((y + k - 1) % n) * n..][..n];
                let sub = &sslab[(y - 1) * n..][..n];
                let drow = &mut dslab[y * n..][..n];
                for z in 0..n {
                    acc[z] += add[z] - sub[z];
                    drow[z] = acc[z];
                }
            }
        });
}

/// Same window along the slowest x axis, sliding one running plane sum
/// through the volume. The window straddles slab boundaries, so this pass
/// stays sequential; the per-plane arithmetic is already stride-1.
fn moving_sum_x(src: &[f64], dst: &mut [f64], n: usize, k: usize) {
    let plane = n * n;
    let mut acc = vec![0.0_f64; plane];
    for x in 0..k {
        let splane = &src[x * plane..][..plane];
        for i in 0..plane {
            acc[i] += splane[i];
        }
    }
    dst[..plane].copy_from_slice(&acc);
    for x in 1..n {
        let add = &src[((x + k - 1) % n) * plane..][..plane];
        let sub = &src[(x - 1) * plane..][..plane];
        let dplane = &mut dst[x * plane..][..plane];
        for i in 0..plane {
            acc[i] += add[i] - sub[i];
            dplane[i] = acc[i];
        }
    }
}
