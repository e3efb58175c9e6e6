//! The threshold/sharpness transfer curve.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mottle_sim::{Grid, ParamSet};

use crate::field::IntensityField;

/// Upper edge of the normalization window. Thresholds must stay strictly
/// below it; at 0.9 the window collapses and the curve divides by zero.
pub const THRESHOLD_CEILING: f32 = 0.9;

/// Errors rejected when constructing a [`Curve`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CurveError {
    /// The threshold was not a finite value in 0.0 inclusive to 0.9
    /// exclusive.
    #[error("threshold must lie in [0.0, 0.9), got {0}")]
    ThresholdOutOfRange(f32),

    /// The sharpness was zero, negative, or not finite.
    #[error("sharpness must be positive and finite, got {0}")]
    SharpnessOutOfRange(f32),
}

/// Result type for curve construction.
pub type CurveResult<T> = Result<T, CurveError>;

/// Validated mapping from species-A concentration to display intensity.
///
/// The concentration is normalized over the window from `threshold` to 0.9,
/// clamped to 0.0-1.0, and raised to the `sharpness` exponent. Sharpness
/// above 1 deepens the contrast between pattern and background; below 1 it
/// lifts the midtones.
///
/// Degenerate configurations are rejected here, at construction, so the
/// per-cell mapping itself is total: every finite concentration comes out as
/// an intensity in 0.0-1.0, never NaN. With the `serde` feature enabled,
/// deserialization runs through the same validation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CurveConfig"))]
pub struct Curve {
    threshold: f32,
    sharpness: f32,
}

/// Raw curve fields as they appear in serialized form, before validation.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CurveConfig {
    threshold: f32,
    sharpness: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<CurveConfig> for Curve {
    type Error = CurveError;

    fn try_from(config: CurveConfig) -> CurveResult<Self> {
        Curve::new(config.threshold, config.sharpness)
    }
}

impl Curve {
    /// Builds a curve, validating both parameters.
    pub fn new(threshold: f32, sharpness: f32) -> CurveResult<Self> {
        if !threshold.is_finite() || !(0.0..THRESHOLD_CEILING).contains(&threshold) {
            return Err(CurveError::ThresholdOutOfRange(threshold));
        }
        if !sharpness.is_finite() || sharpness <= 0.0 {
            return Err(CurveError::SharpnessOutOfRange(sharpness));
        }
        Ok(Self {
            threshold,
            sharpness,
        })
    }

    /// The lower cutoff of the normalization window.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The contrast exponent.
    pub fn sharpness(&self) -> f32 {
        self.sharpness
    }

    /// Maps one species-A concentration to an intensity in 0.0-1.0.
    ///
    /// Concentrations at or below the threshold go to zero; at or above 0.9
    /// they saturate to one. The same input always yields the same bits.
    pub fn map_value(&self, a: f32) -> f32 {
        let mapped = ((a - self.threshold) / (THRESHOLD_CEILING - self.threshold)).clamp(0.0, 1.0);
        mapped.powf(self.sharpness)
    }

    /// Maps a whole grid into an [`IntensityField`].
    ///
    /// Only species A is read; B never reaches the display.
    pub fn map(&self, grid: &Grid) -> IntensityField {
        let values = grid.cells().iter().map(|cell| self.map_value(cell.a)).collect();
        IntensityField::from_raw(grid.width(), grid.height(), values)
    }
}

impl TryFrom<&ParamSet> for Curve {
    type Error = CurveError;

    /// Builds the curve described by a parameter set's display fields.
    fn try_from(params: &ParamSet) -> CurveResult<Self> {
        Curve::new(params.threshold, params.sharpness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_mapping_points() {
        let curve = Curve::new(0.5, 1.0).unwrap();

        // At the threshold the window starts at zero
        assert_eq!(curve.map_value(0.5), 0.0);
        // At the ceiling it saturates
        assert_eq!(curve.map_value(0.9), 1.0);
        // Halfway through the window, with unit sharpness
        assert_eq!(curve.map_value(0.7), 0.5);
    }

    #[test]
    fn test_mapping_clamps_outside_window() {
        let curve = Curve::new(0.5, 1.0).unwrap();
        assert_eq!(curve.map_value(0.0), 0.0);
        assert_eq!(curve.map_value(0.2), 0.0);
        assert_eq!(curve.map_value(1.0), 1.0);
    }

    #[test]
    fn test_sharpness_shapes_midtones() {
        let neutral = Curve::new(0.5, 1.0).unwrap();
        let crisp = Curve::new(0.5, 2.0).unwrap();
        let soft = Curve::new(0.5, 0.5).unwrap();

        let mid = 0.7;
        // 0.5^2 = 0.25, 0.5^0.5 = 0.7071
        assert!((crisp.map_value(mid) - 0.25).abs() < 1e-6);
        assert!((soft.map_value(mid) - 0.70710678).abs() < 1e-5);
        assert!(crisp.map_value(mid) < neutral.map_value(mid));
        assert!(soft.map_value(mid) > neutral.map_value(mid));

        // The endpoints are unaffected by sharpness
        for curve in [neutral, crisp, soft] {
            assert_eq!(curve.map_value(0.5), 0.0);
            assert_eq!(curve.map_value(0.9), 1.0);
        }
    }

    #[test]
    fn test_rejects_degenerate_threshold() {
        // 0.9 collapses the window; beyond it the curve would invert
        assert_eq!(
            Curve::new(0.9, 1.0),
            Err(CurveError::ThresholdOutOfRange(0.9))
        );
        assert!(Curve::new(0.95, 1.0).is_err());
        assert!(Curve::new(-0.1, 1.0).is_err());
        assert!(Curve::new(f32::NAN, 1.0).is_err());
        assert!(Curve::new(f32::INFINITY, 1.0).is_err());

        assert!(Curve::new(0.0, 1.0).is_ok());
        assert!(Curve::new(0.89, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_bad_sharpness() {
        assert_eq!(
            Curve::new(0.3, 0.0),
            Err(CurveError::SharpnessOutOfRange(0.0))
        );
        assert!(Curve::new(0.3, -1.0).is_err());
        assert!(Curve::new(0.3, f32::NAN).is_err());
        assert!(Curve::new(0.3, f32::INFINITY).is_err());

        assert!(Curve::new(0.3, 0.1).is_ok());
        assert!(Curve::new(0.3, 10.0).is_ok());
    }

    #[test]
    fn test_try_from_param_set() {
        let params = ParamSet::default();
        let curve = Curve::try_from(&params).unwrap();
        assert_eq!(curve.threshold(), params.threshold);
        assert_eq!(curve.sharpness(), params.sharpness);

        let bad = ParamSet {
            threshold: 0.9,
            ..ParamSet::default()
        };
        assert!(Curve::try_from(&bad).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialization_validates_like_new() {
        // A stored curve comes back unchanged
        let curve = Curve::new(0.5, 2.0).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        let back: Curve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);

        // Fields that new() rejects cannot arrive as data either; a 0.9
        // threshold would collapse the window and map to NaN
        assert!(serde_json::from_str::<Curve>(r#"{"threshold":0.9,"sharpness":1.0}"#).is_err());
        assert!(serde_json::from_str::<Curve>(r#"{"threshold":0.3,"sharpness":-1.0}"#).is_err());
    }

    #[test]
    fn test_map_reads_species_a_only() {
        let mut grid = Grid::new(8, 6).unwrap();
        grid.seed_spot(4, 3, 2);
        let curve = Curve::new(0.3, 1.0).unwrap();

        let field = curve.map(&grid);
        assert_eq!(field.width(), 8);
        assert_eq!(field.height(), 6);

        // Background cells have a == 1.0 and saturate; seeded cells have
        // a == 0.0 and map to black
        assert_eq!(field.get(0, 0), 1.0);
        assert_eq!(field.get(4, 3), 0.0);
        assert!(field.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
