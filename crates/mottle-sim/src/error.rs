//! Error types for the simulation core.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while constructing a simulation grid.
#[derive(Error, Debug)]
pub enum GridError {
    /// One or both grid dimensions were zero.
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    EmptyDimensions {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// The requested cell count overflows the address space.
    #[error("grid of {width}x{height} cells is too large to index")]
    TooLarge {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// The allocator refused the concentration buffers.
    #[error("failed to allocate concentration buffers: {0}")]
    Allocation(#[from] TryReserveError),

    /// A deserialized grid snapshot carried buffers, an active index, or
    /// concentrations inconsistent with its dimensions.
    #[error("grid snapshot violates the buffer invariants")]
    CorruptSnapshot,
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, GridError>;
