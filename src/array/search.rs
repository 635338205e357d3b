//! Linear and subsequence search over a range
//!
//! Subsequence matching is a plain left-to-right scan with a match cursor
//! that resets to zero on any mismatch, with no partial-match fallback.
//! Overlapping occurrences of patterns with a repeating prefix can
//! therefore go unreported; that behavior is part of the contract and is
//! relied on by `count`/`find_all` consumers.

use std::ops::RangeBounds;

use crate::error::Result;
use crate::range::resolve_range;

use super::Array;

impl<T: PartialEq> Array<T> {
    /// Find the first canonical index of `value` within a range
    pub fn find<R: RangeBounds<isize>>(&self, value: &T, range: R) -> Result<Option<usize>> {
        if self.is_empty() {
            return Ok(None);
        }
        let (b, e) = resolve_range(range, self.len())?;
        Ok(self.as_slice()[b..=e]
            .iter()
            .position(|v| v == value)
            .map(|p| b + p))
    }

    /// Find the start index of the first occurrence of `pattern` within a
    /// range.
    ///
    /// An empty pattern, or one longer than the range width, reports no
    /// match without scanning.
    pub fn find_seq<R: RangeBounds<isize>>(
        &self,
        pattern: &[T],
        range: R,
    ) -> Result<Option<usize>> {
        let mut first = None;
        self.scan_seq(pattern, range, |start| {
            first = Some(start);
            false
        })?;
        Ok(first)
    }

    /// Count the occurrences of `value` within a range
    pub fn count<R: RangeBounds<isize>>(&self, value: &T, range: R) -> Result<usize> {
        if self.is_empty() {
            return Ok(0);
        }
        let (b, e) = resolve_range(range, self.len())?;
        Ok(self.as_slice()[b..=e].iter().filter(|v| *v == value).count())
    }

    /// Count the occurrences of `pattern` within a range.
    ///
    /// The scan resumes with a fresh cursor after each completed match, so
    /// counted occurrences never share elements.
    pub fn count_seq<R: RangeBounds<isize>>(&self, pattern: &[T], range: R) -> Result<usize> {
        let mut count = 0;
        self.scan_seq(pattern, range, |_| {
            count += 1;
            true
        })?;
        Ok(count)
    }

    /// Collect every canonical index holding `value` within a range
    pub fn find_all<R: RangeBounds<isize>>(&self, value: &T, range: R) -> Result<Array<usize>> {
        let mut out = Array::new();
        if self.is_empty() {
            return Ok(out);
        }
        let (b, e) = resolve_range(range, self.len())?;
        for (i, v) in self.as_slice()[b..=e].iter().enumerate() {
            if v == value {
                out.append(b + i)?;
            }
        }
        Ok(out)
    }

    /// Collect the start index of every occurrence of `pattern` within a
    /// range, in scan order.
    pub fn find_all_seq<R: RangeBounds<isize>>(
        &self,
        pattern: &[T],
        range: R,
    ) -> Result<Array<usize>> {
        let mut out = Array::new();
        let mut failure = None;
        self.scan_seq(pattern, range, |start| {
            if let Err(e) = out.append(start) {
                failure = Some(e);
                return false;
            }
            true
        })?;
        match failure {
            Some(e) => Err(e),
            None => Ok(out),
        }
    }

    /// Check whether a range contains `value`
    pub fn contains<R: RangeBounds<isize>>(&self, value: &T, range: R) -> Result<bool> {
        Ok(self.find(value, range)?.is_some())
    }

    /// Check whether a range contains `pattern` as a contiguous run
    pub fn contains_seq<R: RangeBounds<isize>>(&self, pattern: &[T], range: R) -> Result<bool> {
        Ok(self.find_seq(pattern, range)?.is_some())
    }

    /// Shared subsequence scan. Invokes `on_match` with the start index of
    /// each completed match; a `false` return stops the scan. The cursor
    /// resets to zero on mismatch and after every reported match.
    fn scan_seq<R: RangeBounds<isize>>(
        &self,
        pattern: &[T],
        range: R,
        mut on_match: impl FnMut(usize) -> bool,
    ) -> Result<()> {
        if self.is_empty() || pattern.is_empty() {
            return Ok(());
        }
        let (b, e) = resolve_range(range, self.len())?;
        if pattern.len() > e - b + 1 {
            return Ok(());
        }
        let data = self.as_slice();
        let mut cursor = 0;
        for i in b..=e {
            if data[i] == pattern[cursor] {
                cursor += 1;
            } else {
                cursor = 0;
            }
            if cursor == pattern.len() {
                if !on_match(i + 1 - pattern.len()) {
                    return Ok(());
                }
                cursor = 0;
            }
        }
        Ok(())
    }
}
