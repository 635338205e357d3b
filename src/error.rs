//! Error handling for the varray library
//!
//! All fallible operations return [`Result`]. Argument validation happens
//! before any mutation, so an `Err` always leaves the array unchanged.

use thiserror::Error;

use crate::MAX_LEN;

/// Main error type for the varray library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Index outside `[-len, len-1]`
    #[error("invalid index {index} for array of length {len}")]
    InvalidIndex {
        /// The offending index as supplied by the caller
        index: isize,
        /// Array length at the time of the call
        len: usize,
    },

    /// Degenerate or oversized range
    #[error("invalid range: start {start}, end {end}, array length {len}")]
    InvalidRange {
        /// Canonical start position
        start: isize,
        /// Canonical end position
        end: isize,
        /// Array length at the time of the call
        len: usize,
    },

    /// Requested size outside the supported bounds
    #[error("invalid array size {size}: maximum is {max}")]
    InvalidSize {
        /// The requested size
        size: usize,
        /// The fixed size ceiling
        max: usize,
    },

    /// Memory allocation failure
    #[error("memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },
}

impl ArrayError {
    /// Create an invalid index error
    pub fn invalid_index(index: isize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Create an invalid range error
    pub fn invalid_range(start: isize, end: isize, len: usize) -> Self {
        Self::InvalidRange { start, end, len }
    }

    /// Create an invalid size error
    pub fn invalid_size(size: usize) -> Self {
        Self::InvalidSize { size, max: MAX_LEN }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "index",
            Self::InvalidRange { .. } => "range",
            Self::InvalidSize { .. } => "size",
            Self::OutOfMemory { .. } => "memory",
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Allocation failures may succeed on retry once memory pressure eases;
    /// argument errors never will.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Assert that a length stays within the supported bounds
#[inline]
pub fn check_size(size: usize) -> Result<()> {
    if size > MAX_LEN {
        Err(ArrayError::invalid_size(size))
    } else {
        Ok(())
    }
}
