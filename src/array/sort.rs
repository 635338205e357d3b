//! Range-scoped comparison sorting

use std::cmp::Ordering;
use std::ops::RangeBounds;

use crate::error::Result;
use crate::range::resolve_range;

use super::Array;

impl<T: PartialOrd> Array<T> {
    /// Sort the elements of a range in place, ascending or descending.
    ///
    /// Elements outside the range are untouched. Ordering is derived from
    /// `PartialOrd`; incomparable pairs (such as NaN against anything) are
    /// treated as equal, and the sort is not guaranteed stable. Arrays of
    /// length 0 or 1 are already sorted and skip range validation.
    pub fn sort<R: RangeBounds<isize>>(&mut self, ascending: bool, range: R) -> Result<()> {
        if self.len() <= 1 {
            return Ok(());
        }
        let (b, e) = resolve_range(range, self.len())?;
        let window = &mut self.as_mut_slice()[b..=e];
        if ascending {
            window.sort_unstable_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
        } else {
            window.sort_unstable_by(|x, y| y.partial_cmp(x).unwrap_or(Ordering::Equal));
        }
        Ok(())
    }

    /// Return a sorted copy, leaving the receiver unmodified
    pub fn to_sorted<R: RangeBounds<isize>>(&self, ascending: bool, range: R) -> Result<Array<T>>
    where
        T: Clone,
    {
        let mut out = self.clone();
        out.sort(ascending, range)?;
        Ok(out)
    }
}
