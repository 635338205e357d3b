//! Range filling and circular shifting
//!
//! Pattern fills map a shorter pattern onto a target range by one of two
//! placement policies; shifts rotate a range by a signed amount with
//! wraparound inside the range only.

use std::ops::RangeBounds;

use crate::error::Result;
use crate::range::resolve_range;

use super::Array;

/// Placement policy for [`Array::fill_pattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Cycle through the pattern: position `i` of the range takes
    /// `pattern[i % pattern.len()]`
    Repeat,
    /// Stretch the pattern proportionally so it covers the range exactly
    /// once: position `i` takes `pattern[i * pattern.len() / range_len]`
    Stretch,
}

impl<T: Clone> Array<T> {
    /// Overwrite every position in a range with clones of `value`
    pub fn fill<R: RangeBounds<isize>>(&mut self, value: &T, range: R) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        let (b, e) = resolve_range(range, self.len())?;
        for v in &mut self.as_mut_slice()[b..=e] {
            *v = value.clone();
        }
        Ok(())
    }

    /// Overwrite a range with a pattern placed according to `mode`.
    ///
    /// An empty pattern is a no-op; a one-element pattern behaves exactly
    /// like a scalar [`Array::fill`].
    pub fn fill_pattern<R: RangeBounds<isize>>(
        &mut self,
        pattern: &[T],
        mode: FillMode,
        range: R,
    ) -> Result<()> {
        if self.is_empty() || pattern.is_empty() {
            return Ok(());
        }
        if pattern.len() == 1 {
            return self.fill(&pattern[0], range);
        }
        let (b, e) = resolve_range(range, self.len())?;
        let range_len = e - b + 1;
        let data = self.as_mut_slice();
        match mode {
            FillMode::Repeat => {
                for i in 0..range_len {
                    data[b + i] = pattern[i % pattern.len()].clone();
                }
            }
            FillMode::Stretch => {
                for i in 0..range_len {
                    data[b + i] = pattern[i * pattern.len() / range_len].clone();
                }
            }
        }
        Ok(())
    }

    /// Rotate the elements of a range circularly by `amount` positions.
    ///
    /// Positive amounts move elements toward higher indices with wraparound
    /// inside the range; negative amounts move left. A rotation that is a
    /// whole multiple of the range width, or a range of width 1, changes
    /// nothing.
    pub fn shift<R: RangeBounds<isize>>(&mut self, amount: isize, range: R) -> Result<()> {
        if self.is_empty() || amount == 0 {
            return Ok(());
        }
        let (b, e) = resolve_range(range, self.len())?;
        let len = (e - b + 1) as isize;
        if len <= 1 || amount.rem_euclid(len) == 0 {
            return Ok(());
        }
        let window: Vec<T> = self.as_slice()[b..=e].to_vec();
        let data = self.as_mut_slice();
        for (offset, v) in window.into_iter().enumerate() {
            let dest = (offset as isize + amount).rem_euclid(len) as usize;
            data[b + dest] = v;
        }
        Ok(())
    }
}
