//! Gray-Scott reaction-diffusion simulation on a toroidal grid.
//!
//! Two chemical species share a 2D grid: A feeds in everywhere and B eats A,
//! multiplies, and decays. Depending on the feed and kill rates the system
//! settles into spots, stripes, mazes, or crawling worms. The kill rate here
//! additionally sweeps from left to right across the grid, so one run shows a
//! band of neighboring regimes.
//!
//! - [`Session`] - owns a grid plus its randomness and steps it in batches
//! - [`Grid`] - double-buffered toroidal cell storage
//! - [`ParamSet`] / [`Regime`] - tunable parameters and named presets
//! - [`Dispatch`] - sequential or data-parallel kernel execution
//!
//! # Example
//!
//! ```
//! use mottle_sim::{Regime, SeedPolicy, Session};
//!
//! // Reproducible session: fixed seed, 96x64 cells
//! let mut session = Session::new(96, 64, SeedPolicy::Fixed(7)).unwrap();
//!
//! // Each batch runs `iterations` kernel steps with one parameter snapshot
//! let params = Regime::Coral.parameters();
//! let grid = session.advance(&params);
//!
//! assert_eq!(grid.width(), 96);
//! assert!(grid.cells().iter().all(|c| c.b >= 0.0 && c.b <= 1.0));
//! ```

mod dispatch;
mod error;
mod grid;
mod kernel;
mod params;
mod session;

pub use dispatch::{Dispatch, PARALLEL_THRESHOLD};
pub use error::{GridError, SimResult};
pub use grid::{Cell, Grid, SEED_SPOT_COUNT, SEED_SPOT_RADIUS};
pub use params::{CellRates, ParamSet, Regime};
pub use session::{SeedPolicy, Session};
