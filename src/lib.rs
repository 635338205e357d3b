//! # Varray: Broadcasting Dynamic Arrays
//!
//! This crate provides [`Array<T>`], a dynamically-sized contiguous
//! container with Python/NumPy-style ergonomics over a flat typed buffer.
//!
//! ## Key Features
//!
//! - **Negative indexing**: `a[-1]` is the last element, on every
//!   index-taking operation
//! - **Range-scoped operations**: fill, reverse, sort, search, shift and
//!   the statistical reductions all accept `RangeBounds<isize>` windows
//! - **Pattern search**: find/count/find_all over single elements and
//!   contiguous subsequences
//! - **Broadcasting operators**: arithmetic, comparison masks and boolean
//!   mask combination between arrays of unequal length
//! - **Exact-size storage**: no hidden spare capacity; every structural
//!   mutation reallocates the exclusively-owned buffer to the exact size
//!
//! ## Quick Start
//!
//! ```rust
//! use varray::{Array, FillMode};
//!
//! let mut a = Array::from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
//!
//! // negative indexing and range-scoped mutation
//! assert_eq!(a[-1], 6);
//! a.shift(1, ..).unwrap();
//! assert_eq!(a.to_vec(), vec![6, 1, 2, 3, 4, 5]);
//!
//! // pattern fills
//! let mut z: Array<i32> = Array::with_len(10).unwrap();
//! z.fill_pattern(&[1, 2, 3], FillMode::Repeat, ..).unwrap();
//! assert_eq!(z.to_vec(), vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
//!
//! // broadcasting arithmetic
//! let small = Array::from_slice(&[1, 2, 3]).unwrap();
//! let large = Array::from_slice(&[1, 2, 3, 4, 5]).unwrap();
//! assert_eq!((&small + &large).to_vec(), vec![2, 4, 6, 4, 5]);
//!
//! // reductions
//! assert_eq!(large.sum(..).unwrap(), 15);
//! assert_eq!(large.mean(..).unwrap(), 3.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

mod array;
mod buffer;
pub mod error;
pub mod range;

pub use array::{Array, FillMode};
pub use error::{ArrayError, Result};

/// Maximum number of elements an array may hold
pub const MAX_LEN: usize = i32::MAX as usize;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing varray v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_re_exports() {
        let _a = Array::<i32>::new();
        let _m = FillMode::Repeat;
        let _err = ArrayError::invalid_size(usize::MAX);
        assert!(std::any::type_name::<Result<()>>().contains("ArrayError"));
    }

    #[test]
    fn test_max_len_is_32bit_positive_limit() {
        assert_eq!(MAX_LEN, 2147483647);
    }
}
