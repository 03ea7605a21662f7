//! Error type shared by every algorithm and by the measurement harness.

use thiserror::Error;

/// Failure kinds reported by sorting, searching, generation and export.
#[derive(Debug, Error)]
pub enum AlgoError {
    /// Index bounds are inverted or do not fit inside the table.
    #[error("invalid range [{ip}, {iu}] for a table of {len} elements")]
    InvalidRange { ip: usize, iu: usize, len: usize },

    /// A working buffer could not be allocated.
    #[error("out of memory")]
    OutOfMemory,

    /// A permutation or key stream could not be produced.
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// Insertion into a dictionary that is already full.
    #[error("dictionary capacity of {size} exceeded")]
    CapacityExceeded { size: usize },

    /// The searched key is not stored in the table.
    #[error("key {key} not found")]
    NotFound { key: i32 },

    /// A pivot policy produced a position outside the range being partitioned.
    #[error("pivot position {pos} outside range [{ip}, {iu}]")]
    PivotOutOfRange { pos: i64, ip: usize, iu: usize },

    /// Sweep bounds that would never terminate or never run.
    #[error("invalid sweep: min {num_min}, max {num_max}, increment {incr}")]
    InvalidSweep {
        num_min: usize,
        num_max: usize,
        incr: usize,
    },

    /// Writing or reading a time table failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::collections::TryReserveError> for AlgoError {
    fn from(_: std::collections::TryReserveError) -> Self {
        AlgoError::OutOfMemory
    }
}

pub type Result<T> = std::result::Result<T, AlgoError>;

/// Check that `[ip, iu]` is a non-inverted range inside a table of `len` elements.
pub(crate) fn check_range(len: usize, ip: usize, iu: usize) -> Result<()> {
    if ip > iu || iu >= len {
        return Err(AlgoError::InvalidRange { ip, iu, len });
    }
    Ok(())
}
