//! Simulation parameters and per-cell rate resolution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full parameter set for one simulation batch.
///
/// Values are plain floats and deliberately unvalidated: the kernel computes
/// whatever the update formulas yield and the post-update clamp keeps
/// concentrations bounded, so out-of-range parameters degrade the pattern
/// instead of aborting the run. The two display parameters, [`threshold`] and
/// [`sharpness`], are validated where they are consumed, by the intensity
/// curve.
///
/// [`threshold`]: ParamSet::threshold
/// [`sharpness`]: ParamSet::sharpness
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParamSet {
    /// Diffusion rate of species A (typical range 0.0-2.0).
    pub d_a: f32,
    /// Diffusion rate of species B (typical range 0.0-2.0).
    pub d_b: f32,
    /// Baseline feed rate of species A (typical range 0.0-0.1).
    pub feed: f32,
    /// Scale of the feed adjustment applied by `feed_variation`
    /// (typical range 0.0-0.1).
    pub feed_diff: f32,
    /// Feed adjustment control in 0.0-100.0; 50 leaves `feed` unchanged,
    /// values below lower it and values above raise it.
    pub feed_variation: f32,
    /// Kill rate of species B at the left edge of the grid
    /// (typical range 0.0-0.1).
    pub kill_min: f32,
    /// Kill rate approached, never reached, at the right edge
    /// (typical range 0.0-0.1).
    pub kill_max: f32,
    /// Kernel steps executed per batch (typical range 1-64).
    pub iterations: u32,
    /// Contrast exponent of the intensity curve, must be positive.
    pub sharpness: f32,
    /// Lower cutoff of the intensity curve, must stay below 0.9.
    pub threshold: f32,
}

impl Default for ParamSet {
    fn default() -> Self {
        Self {
            d_a: 1.0,
            d_b: 0.5,
            feed: 0.055,
            feed_diff: 0.01,
            feed_variation: 50.0,
            kill_min: 0.05,
            kill_max: 0.066,
            iterations: 10,
            sharpness: 1.0,
            threshold: 0.3,
        }
    }
}

/// Reaction rates resolved for a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRates {
    /// Replenishment rate of species A.
    pub feed: f32,
    /// Decay rate of species B.
    pub kill: f32,
}

impl ParamSet {
    /// Resolves the reaction rates for the cell at column `x` of a grid
    /// `width` columns wide.
    ///
    /// The feed rate is uniform over the grid, shifted from the baseline by
    /// the `feed_variation` control. The kill rate sweeps linearly from
    /// `kill_min` at column 0 toward `kill_max` at the right edge, which
    /// keeps several pattern regimes visible side by side in one run. The
    /// last column lands at `kill_min + ((width-1)/width) * (kill_max -
    /// kill_min)`, just short of `kill_max`.
    ///
    /// Pure and cheap enough that the kernel re-evaluates it per cell on
    /// every iteration, so parameter edits always apply on the next batch.
    pub fn rates_at(&self, x: usize, width: usize) -> CellRates {
        let feed = self.feed + ((self.feed_variation - 50.0) * self.feed_diff) / 100.0;
        let kill = self.kill_min + (x as f32 / width as f32) * (self.kill_max - self.kill_min);
        CellRates { feed, kill }
    }
}

/// Named parameter regimes of the Gray-Scott system.
///
/// Each regime fixes the feed rate and the kill sweep; everything else comes
/// from [`ParamSet::default`]. Because the kill rate varies across columns,
/// a single run usually shows the regime morphing from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Regime {
    /// Round cell-like blobs that split and drift apart.
    Spots,
    /// Parallel bands, fingerprint-like.
    Stripes,
    /// Dense connected corridors.
    Maze,
    /// Isolated self-sustaining dots.
    Solitons,
    /// Short crawling segments.
    Worms,
    /// Branching coral-like growth.
    Coral,
}

impl Regime {
    /// All regimes, in display order.
    pub const ALL: [Regime; 6] = [
        Regime::Spots,
        Regime::Stripes,
        Regime::Maze,
        Regime::Solitons,
        Regime::Worms,
        Regime::Coral,
    ];

    /// Returns the parameter set for this regime.
    pub fn parameters(&self) -> ParamSet {
        let (feed, kill_min, kill_max) = match self {
            Regime::Spots => (0.035, 0.060, 0.068),
            Regime::Stripes => (0.022, 0.048, 0.055),
            Regime::Maze => (0.029, 0.054, 0.060),
            Regime::Solitons => (0.030, 0.059, 0.064),
            Regime::Worms => (0.078, 0.058, 0.064),
            Regime::Coral => (0.0545, 0.060, 0.064),
        };
        ParamSet {
            feed,
            kill_min,
            kill_max,
            ..ParamSet::default()
        }
    }

    /// The lowercase name of this regime.
    pub fn name(&self) -> &'static str {
        match self {
            Regime::Spots => "spots",
            Regime::Stripes => "stripes",
            Regime::Maze => "maze",
            Regime::Solitons => "solitons",
            Regime::Worms => "worms",
            Regime::Coral => "coral",
        }
    }

    /// Looks up a regime by its lowercase name.
    pub fn from_name(name: &str) -> Option<Regime> {
        Regime::ALL.iter().copied().find(|r| r.name() == name)
    }
}
