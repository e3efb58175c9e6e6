//! Simulation sessions: grid, randomness, and batch stepping in one place.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dispatch::Dispatch;
use crate::error::SimResult;
use crate::grid::Grid;
use crate::params::ParamSet;

/// Where the seed-spot randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedPolicy {
    /// Fresh OS entropy; every session and every reset is unique.
    Entropy,
    /// A seeded stream; the whole session, resets included, replays
    /// identically for the same seed.
    Fixed(u64),
}

/// A running simulation over one fixed-size grid.
///
/// The session owns the grid, the random stream that places seed spots, and
/// the dispatch strategy. Buffers are allocated once in [`Session::new`];
/// running at a different size means creating a new session.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    rng: StdRng,
    dispatch: Dispatch,
}

impl Session {
    /// Allocates a `width x height` session and seeds the initial pattern.
    pub fn new(width: usize, height: usize, policy: SeedPolicy) -> SimResult<Self> {
        let rng = match policy {
            SeedPolicy::Entropy => StdRng::from_entropy(),
            SeedPolicy::Fixed(seed) => StdRng::seed_from_u64(seed),
        };
        let mut session = Self {
            grid: Grid::new(width, height)?,
            rng,
            dispatch: Dispatch::Auto,
        };
        session.grid.reseed(&mut session.rng);
        log::debug!("session created: {width}x{height} cells, {policy:?}");
        Ok(session)
    }

    /// Throws away the evolved pattern and places fresh random seed spots.
    ///
    /// This is the only way the grid re-randomizes; nothing triggers it
    /// implicitly.
    pub fn reset(&mut self) {
        self.grid.reseed(&mut self.rng);
        log::debug!("session reset, seed spots replaced");
    }

    /// Runs one batch: `params.iterations` kernel steps, all from this one
    /// parameter snapshot, then returns the advanced grid.
    ///
    /// Zero iterations is a valid no-op batch. Parameter changes never apply
    /// mid-batch; pass the updated set to the next call.
    pub fn advance(&mut self, params: &ParamSet) -> &Grid {
        for _ in 0..params.iterations {
            self.grid.step(params, self.dispatch);
        }
        log::trace!("batch done: {} iterations", params.iterations);
        &self.grid
    }

    /// The grid as of the last completed step.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The strategy future steps will use.
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    /// Chooses how future steps sweep the grid. Purely a performance knob;
    /// results do not depend on it.
    pub fn set_dispatch(&mut self, dispatch: Dispatch) {
        self.dispatch = dispatch;
    }
}
