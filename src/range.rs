//! Index and range resolution
//!
//! User-facing positions are signed: a negative index counts back from the
//! end of the array, so `-1` is the last element. Range-scoped operations
//! accept any `RangeBounds<isize>` (`..`, `a..b`, `a..=b`, `a..`, `..=b`)
//! and resolve it here to a canonical inclusive `(start, end)` pair before
//! touching the buffer.

use std::ops::{Bound, RangeBounds};

use crate::error::{ArrayError, Result};

/// Normalize a signed index to a canonical buffer offset.
///
/// Accepts any index in `[-len, len-1]`; negative values map to
/// `index + len`. Anything else is rejected.
///
/// # Examples
///
/// ```rust
/// use varray::range::resolve_index;
///
/// assert_eq!(resolve_index(0, 4).unwrap(), 0);
/// assert_eq!(resolve_index(-1, 4).unwrap(), 3);
/// assert!(resolve_index(4, 4).is_err());
/// ```
#[inline]
pub fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let slen = len as isize;
    if index < -slen || index >= slen {
        return Err(ArrayError::invalid_index(index, len));
    }
    if index >= 0 {
        Ok(index as usize)
    } else {
        Ok((index + slen) as usize)
    }
}

/// Resolve a range specification to canonical inclusive `(start, end)`
/// positions over `[0, len-1]`.
///
/// An unbounded start means the first position; an unbounded end means the
/// last. Bounded endpoints pass through [`resolve_index`], so negative
/// positions work on both sides. An exclusive end additionally accepts the
/// one-past-the-end position, so `0..len` spans the whole array.
///
/// The resolved width `end - start + 1` must lie in `[1, len]`: empty and
/// wrapped ranges are rejected. Callers are expected to short-circuit
/// `len == 0` before resolving.
pub fn resolve_range<R: RangeBounds<isize>>(range: R, len: usize) -> Result<(usize, usize)> {
    let slen = len as isize;
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&b) => resolve_index(b, len)? as isize,
        Bound::Excluded(&b) => resolve_index(b, len)? as isize + 1,
    };
    let end = match range.end_bound() {
        Bound::Unbounded => slen - 1,
        Bound::Included(&e) => resolve_index(e, len)? as isize,
        Bound::Excluded(&e) => {
            let canonical = if e >= 0 { e } else { e + slen };
            if canonical < 0 || canonical > slen {
                return Err(ArrayError::invalid_index(e, len));
            }
            canonical - 1
        }
    };
    let width = end - start + 1;
    if width < 1 || width > slen {
        return Err(ArrayError::invalid_range(start, end, len));
    }
    Ok((start as usize, end as usize))
}
