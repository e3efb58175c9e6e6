//! Grayscale display mapping for reaction-diffusion grids.
//!
//! The simulation core hands over raw concentrations; this crate turns them
//! into something viewable. A validated [`Curve`] normalizes species A over a
//! threshold window and applies a contrast exponent, producing an
//! [`IntensityField`] that can be read per cell, resampled at arbitrary UV
//! coordinates, or quantized to an 8-bit grayscale image.
//!
//! # Example
//!
//! ```
//! use mottle_shade::Curve;
//! use mottle_sim::{ParamSet, SeedPolicy, Session};
//!
//! let mut session = Session::new(64, 64, SeedPolicy::Fixed(3)).unwrap();
//! let params = ParamSet::default();
//! session.advance(&params);
//!
//! // The curve validates the display parameters up front
//! let curve = Curve::try_from(&params).unwrap();
//! let field = curve.map(session.grid());
//!
//! assert_eq!(field.width(), 64);
//! assert!(field.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
//! ```

mod curve;
mod field;

pub use curve::{Curve, CurveError, CurveResult, THRESHOLD_CEILING};
pub use field::IntensityField;
