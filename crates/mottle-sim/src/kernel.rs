//! The Gray-Scott update kernel.
//!
//! One step computes, for every cell, a 9-point Laplacian of both species and
//! the explicit Euler update with unit time step:
//!
//! ```text
//! nextA = a + dA * lapA - a*b*b + feed * (1 - a)
//! nextB = b + dB * lapB + a*b*b - (feed + kill) * b
//! ```
//!
//! Results are clamped to 0.0-1.0 only after both formulas have run on the
//! unclamped values. Neighbor lookups wrap around the torus.

use rayon::prelude::*;

use crate::dispatch::Dispatch;
use crate::grid::Cell;
use crate::params::ParamSet;

/// Stencil weight of the four diagonal neighbors.
const WEIGHT_CORNER: f32 = 0.05;
/// Stencil weight of the four orthogonal neighbors.
const WEIGHT_EDGE: f32 = 0.2;
/// Stencil weight of the cell itself.
const WEIGHT_CENTER: f32 = -1.0;

/// Computes one full-grid step from `read` into `write`.
///
/// `read` is the complete pre-step state and is never written; `write` is
/// overwritten entirely. Both dispatch paths run the same row kernel in the
/// same per-cell order, so the strategy has no effect on the output bits.
pub(crate) fn step_grid(
    read: &[Cell],
    write: &mut [Cell],
    width: usize,
    height: usize,
    params: &ParamSet,
    dispatch: Dispatch,
) {
    if dispatch.is_parallel(width * height) {
        write
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| step_row(read, row, y, width, height, params));
    } else {
        for (y, row) in write.chunks_mut(width).enumerate() {
            step_row(read, row, y, width, height, params);
        }
    }
}

/// Updates one output row from the full read buffer.
fn step_row(read: &[Cell], row: &mut [Cell], y: usize, width: usize, height: usize, params: &ParamSet) {
    for (x, out) in row.iter_mut().enumerate() {
        let current = read[y * width + x];
        let (lap_a, lap_b) = laplacian(read, width, height, x, y);
        let rates = params.rates_at(x, width);
        let reaction = current.a * current.b * current.b;

        let next_a = current.a + params.d_a * lap_a - reaction + rates.feed * (1.0 - current.a);
        let next_b = current.b + params.d_b * lap_b + reaction - (rates.feed + rates.kill) * current.b;

        *out = Cell {
            a: next_a.clamp(0.0, 1.0),
            b: next_b.clamp(0.0, 1.0),
        };
    }
}

/// 9-point Laplacian of both species at `(x, y)`, with toroidal wrap.
///
/// The weights sum to zero, so a uniform field has no net diffusion.
#[inline]
fn laplacian(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> (f32, f32) {
    let left = if x == 0 { width - 1 } else { x - 1 };
    let right = if x == width - 1 { 0 } else { x + 1 };
    let up = if y == 0 { height - 1 } else { y - 1 };
    let down = if y == height - 1 { 0 } else { y + 1 };

    let row_up = up * width;
    let row_mid = y * width;
    let row_down = down * width;

    let center = cells[row_mid + x];
    let edges_a = cells[row_mid + left].a
        + cells[row_mid + right].a
        + cells[row_up + x].a
        + cells[row_down + x].a;
    let edges_b = cells[row_mid + left].b
        + cells[row_mid + right].b
        + cells[row_up + x].b
        + cells[row_down + x].b;
    let corners_a = cells[row_up + left].a
        + cells[row_up + right].a
        + cells[row_down + left].a
        + cells[row_down + right].a;
    let corners_b = cells[row_up + left].b
        + cells[row_up + right].b
        + cells[row_down + left].b
        + cells[row_down + right].b;

    (
        WEIGHT_CENTER * center.a + WEIGHT_EDGE * edges_a + WEIGHT_CORNER * corners_a,
        WEIGHT_CENTER * center.b + WEIGHT_EDGE * edges_b + WEIGHT_CORNER * corners_b,
    )
}
