//! Execution strategy selection for the step kernel.

/// Cell count at or above which [`Dispatch::Auto`] picks the parallel path.
///
/// Below this the fork-join overhead of the thread pool outweighs the row
/// work; a 64x64 grid is roughly where the two paths break even.
pub const PARALLEL_THRESHOLD: usize = 64 * 64;

/// How the step kernel sweeps the grid.
///
/// The strategy never changes numeric results. Both paths drive the same row
/// kernel over the same read buffer, so a step is bit-identical whichever
/// strategy executes it; the choice only affects wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    /// Pick by grid size: sequential for small grids, parallel for large.
    #[default]
    Auto,
    /// Sweep rows one after another on the calling thread.
    Sequential,
    /// Fan rows out across rayon's thread pool.
    Parallel,
}

impl Dispatch {
    /// Whether this strategy takes the data-parallel path for a grid of
    /// `cells` cells.
    pub fn is_parallel(self, cells: usize) -> bool {
        match self {
            Dispatch::Auto => cells >= PARALLEL_THRESHOLD,
            Dispatch::Sequential => false,
            Dispatch::Parallel => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_picks_by_size() {
        assert!(!Dispatch::Auto.is_parallel(PARALLEL_THRESHOLD - 1));
        assert!(Dispatch::Auto.is_parallel(PARALLEL_THRESHOLD));
        assert!(Dispatch::Auto.is_parallel(1024 * 1024));
    }

    #[test]
    fn test_explicit_strategies_ignore_size() {
        assert!(!Dispatch::Sequential.is_parallel(usize::MAX));
        assert!(Dispatch::Parallel.is_parallel(1));
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Dispatch::default(), Dispatch::Auto);
    }
}
