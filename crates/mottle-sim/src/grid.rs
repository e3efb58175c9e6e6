//! Double-buffered toroidal concentration grid.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dispatch::Dispatch;
use crate::error::{GridError, SimResult};
use crate::kernel;
use crate::params::ParamSet;

/// Number of circular spots placed by [`Grid::reseed`].
pub const SEED_SPOT_COUNT: usize = 20;

/// Radius, in cells, of each spot placed by [`Grid::reseed`].
pub const SEED_SPOT_RADIUS: usize = 3;

/// Concentration pair for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Concentration of species A, kept in 0.0-1.0.
    pub a: f32,
    /// Concentration of species B, kept in 0.0-1.0.
    pub b: f32,
}

impl Cell {
    /// Pure species A, the quiescent background state.
    pub const SPECIES_A: Cell = Cell { a: 1.0, b: 0.0 };
    /// Pure species B, the seeded state.
    pub const SPECIES_B: Cell = Cell { a: 0.0, b: 1.0 };
}

/// A fixed-size toroidal grid of concentration cells, double buffered.
///
/// The grid owns two equally sized buffers addressed by index; `active` names
/// the buffer readers see. [`Grid::step`] reads the active buffer, writes the
/// other one, and flips the index only after the full sweep, so readers never
/// observe a half-updated state. Cells are stored row major, `y * width + x`.
///
/// Both buffers are allocated once in [`Grid::new`]; a different size means
/// building a new grid.
///
/// With the `serde` feature enabled, snapshots serialize as stored, and
/// deserialization re-checks dimensions, buffer lengths, the active index,
/// and the concentration range before yielding a grid.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridSnapshot"))]
pub struct Grid {
    width: usize,
    height: usize,
    buffers: [Vec<Cell>; 2],
    active: usize,
}

/// Raw grid fields as they appear in serialized form, before validation.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridSnapshot {
    width: usize,
    height: usize,
    buffers: [Vec<Cell>; 2],
    active: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<GridSnapshot> for Grid {
    type Error = GridError;

    fn try_from(snapshot: GridSnapshot) -> SimResult<Self> {
        let GridSnapshot {
            width,
            height,
            buffers,
            active,
        } = snapshot;
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        if active > 1 || buffers.iter().any(|buffer| buffer.len() != len) {
            return Err(GridError::CorruptSnapshot);
        }
        let in_range = |v: f32| (0.0..=1.0).contains(&v);
        if buffers
            .iter()
            .flatten()
            .any(|cell| !in_range(cell.a) || !in_range(cell.b))
        {
            return Err(GridError::CorruptSnapshot);
        }
        Ok(Self {
            width,
            height,
            buffers,
            active,
        })
    }
}

impl Grid {
    /// Allocates a `width x height` grid with every cell set to pure
    /// species A.
    ///
    /// Fails on zero dimensions, on a cell count that overflows `usize`, and
    /// on allocation refusal, which large grids can realistically hit.
    pub fn new(width: usize, height: usize) -> SimResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        let mut buffers = [Vec::new(), Vec::new()];
        for buffer in &mut buffers {
            buffer.try_reserve_exact(len)?;
            buffer.resize(len, Cell::SPECIES_A);
        }

        Ok(Self {
            width,
            height,
            buffers,
            active: 0,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The readable buffer, row major.
    pub fn cells(&self) -> &[Cell] {
        &self.buffers[self.active]
    }

    /// Concentrations at `(x, y)`.
    ///
    /// Panics when the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells()[y * self.width + x]
    }

    /// Paints one circular spot of pure species B centered at `(cx, cy)`.
    ///
    /// A cell belongs to the spot when `dx*dx + dy*dy <= radius * radius`;
    /// spots crossing an edge wrap around the torus. A radius of zero paints
    /// the single center cell.
    pub fn seed_spot(&mut self, cx: usize, cy: usize, radius: usize) {
        let width = self.width;
        let w = width as isize;
        let h = self.height as isize;
        let r = radius as isize;
        let buffer = &mut self.buffers[self.active];
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let x = (cx as isize + dx).rem_euclid(w) as usize;
                let y = (cy as isize + dy).rem_euclid(h) as usize;
                buffer[y * width + x] = Cell::SPECIES_B;
            }
        }
    }

    /// Resets to pure species A and places [`SEED_SPOT_COUNT`] random spots
    /// of radius [`SEED_SPOT_RADIUS`].
    ///
    /// Spot centers are the only randomness in the system; they come from the
    /// caller's generator, so a seeded generator makes the placement
    /// reproducible. Spots may overlap, which only lowers the total seeded
    /// area.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        self.buffers[self.active].fill(Cell::SPECIES_A);
        for _ in 0..SEED_SPOT_COUNT {
            let cx = rng.gen_range(0..self.width);
            let cy = rng.gen_range(0..self.height);
            self.seed_spot(cx, cy, SEED_SPOT_RADIUS);
        }
    }

    /// Advances the grid by one kernel step under `params`.
    ///
    /// The whole inactive buffer is computed from the active one before the
    /// buffer index flips, so a partially written state is never readable.
    pub fn step(&mut self, params: &ParamSet, dispatch: Dispatch) {
        let (width, height) = (self.width, self.height);
        let (read, write) = self.split_read_write();
        kernel::step_grid(read, write, width, height, params, dispatch);
        self.active ^= 1;
    }

    /// Borrows the buffer pair as one shared read half and one exclusive
    /// write half.
    fn split_read_write(&mut self) -> (&[Cell], &mut [Cell]) {
        let (lo, hi) = self.buffers.split_at_mut(1);
        if self.active == 0 {
            (lo[0].as_slice(), hi[0].as_mut_slice())
        } else {
            (hi[0].as_slice(), lo[0].as_mut_slice())
        }
    }
}
