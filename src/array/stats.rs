//! Statistical reductions over numeric element types
//!
//! The bounds are compile-time: extrema need `PartialOrd`, the sum/mean
//! family needs the `num-traits` arithmetic identities plus an `f64`
//! conversion. Reductions over an empty array return zero rather than
//! failing.
//!
//! `variance` keeps a quirk of the reference behavior on purpose: the mean
//! is taken over the selected range, but the sample denominator is the
//! whole array's length minus one.

use std::ops::RangeBounds;

use num_traits::{Num, ToPrimitive, Zero};

use crate::error::Result;
use crate::range::resolve_range;

use super::Array;

#[inline]
fn lift<T: ToPrimitive>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

impl<T: Copy + PartialOrd + Zero> Array<T> {
    /// Smallest value in a range, or zero for an empty array
    pub fn min<R: RangeBounds<isize>>(&self, range: R) -> Result<T> {
        if self.is_empty() {
            return Ok(T::zero());
        }
        let (b, e) = resolve_range(range, self.len())?;
        let data = self.as_slice();
        let mut best = data[b];
        for &v in &data[b + 1..=e] {
            if v < best {
                best = v;
            }
        }
        Ok(best)
    }

    /// Largest value in a range, or zero for an empty array
    pub fn max<R: RangeBounds<isize>>(&self, range: R) -> Result<T> {
        if self.is_empty() {
            return Ok(T::zero());
        }
        let (b, e) = resolve_range(range, self.len())?;
        let data = self.as_slice();
        let mut best = data[b];
        for &v in &data[b + 1..=e] {
            if v > best {
                best = v;
            }
        }
        Ok(best)
    }

    /// Every index attaining the minimum of a range, in index order
    pub fn argmin<R: RangeBounds<isize>>(&self, range: R) -> Result<Array<usize>> {
        if self.is_empty() {
            return Ok(Array::new());
        }
        let (b, e) = resolve_range(range, self.len())?;
        let data = self.as_slice();
        let mut best = data[b];
        let mut out = Array::new();
        out.append(b)?;
        for i in b + 1..=e {
            if data[i] < best {
                best = data[i];
                out.clear();
                out.append(i)?;
            } else if data[i] == best {
                out.append(i)?;
            }
        }
        Ok(out)
    }

    /// Every index attaining the maximum of a range, in index order
    pub fn argmax<R: RangeBounds<isize>>(&self, range: R) -> Result<Array<usize>> {
        if self.is_empty() {
            return Ok(Array::new());
        }
        let (b, e) = resolve_range(range, self.len())?;
        let data = self.as_slice();
        let mut best = data[b];
        let mut out = Array::new();
        out.append(b)?;
        for i in b + 1..=e {
            if data[i] > best {
                best = data[i];
                out.clear();
                out.append(i)?;
            } else if data[i] == best {
                out.append(i)?;
            }
        }
        Ok(out)
    }
}

impl<T: Copy + Num + ToPrimitive> Array<T> {
    /// Sum of a range, or zero for an empty array.
    ///
    /// Accumulation happens in `T`, so integer overflow follows the element
    /// type's own semantics.
    pub fn sum<R: RangeBounds<isize>>(&self, range: R) -> Result<T> {
        if self.is_empty() {
            return Ok(T::zero());
        }
        let (b, e) = resolve_range(range, self.len())?;
        Ok(self.sum_span(b, e))
    }

    /// Product of a range, or zero for an empty array.
    ///
    /// Short-circuits to zero the moment a zero factor is seen.
    pub fn product<R: RangeBounds<isize>>(&self, range: R) -> Result<T> {
        if self.is_empty() {
            return Ok(T::zero());
        }
        let (b, e) = resolve_range(range, self.len())?;
        let data = self.as_slice();
        let mut p = T::one();
        for &v in &data[b..=e] {
            p = p * v;
            if p.is_zero() {
                return Ok(T::zero());
            }
        }
        Ok(p)
    }

    /// Arithmetic mean of a range, or zero for an empty array
    pub fn mean<R: RangeBounds<isize>>(&self, range: R) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        let (b, e) = resolve_range(range, self.len())?;
        Ok(self.mean_span(b, e))
    }

    /// Geometric mean of a range, or zero for an empty array
    pub fn mean_geometric<R: RangeBounds<isize>>(&self, range: R) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        let (b, e) = resolve_range(range, self.len())?;
        let len = (e - b + 1) as f64;
        let product = self.product(b as isize..=e as isize)?;
        Ok(lift(product).powf(1.0 / len))
    }

    /// Harmonic mean of a range, or zero for an empty array
    pub fn mean_harmonic<R: RangeBounds<isize>>(&self, range: R) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        let (b, e) = resolve_range(range, self.len())?;
        let len = (e - b + 1) as f64;
        let mut reciprocal_sum = 0.0;
        for &v in &self.as_slice()[b..=e] {
            reciprocal_sum += 1.0 / lift(v);
        }
        Ok(len / reciprocal_sum)
    }

    /// Weighted mean of a range.
    ///
    /// Position `i` of the range pairs with `weights[i - start]`. When the
    /// weights run out before the range does, only the overlapping prefix
    /// contributes, to the numerator and the denominator alike; weights
    /// beyond the range are ignored. Empty weights yield zero.
    pub fn weighted_mean<R: RangeBounds<isize>>(&self, weights: &[f64], range: R) -> Result<f64> {
        if self.is_empty() || weights.is_empty() {
            return Ok(0.0);
        }
        let (b, e) = resolve_range(range, self.len())?;
        let data = self.as_slice();
        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        for i in b..=e {
            let Some(&w) = weights.get(i - b) else {
                break;
            };
            weighted_sum += lift(data[i]) * w;
            weight_sum += w;
        }
        Ok(weighted_sum / weight_sum)
    }

    /// Sample variance with the mean taken over the range and the
    /// denominator taken from the whole array (`len - 1`).
    ///
    /// A range of width 1, like an empty array, yields zero.
    pub fn variance<R: RangeBounds<isize>>(&self, range: R) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        let (b, e) = resolve_range(range, self.len())?;
        if e - b + 1 <= 1 {
            return Ok(0.0);
        }
        let m = self.mean_span(b, e);
        let mut acc = 0.0;
        for &v in &self.as_slice()[b..=e] {
            let d = lift(v) - m;
            acc += d * d;
        }
        Ok(acc / (self.len() as f64 - 1.0))
    }

    /// Standard deviation, the square root of [`Array::variance`]
    pub fn stdev<R: RangeBounds<isize>>(&self, range: R) -> Result<f64> {
        Ok(self.variance(range)?.sqrt())
    }

    fn sum_span(&self, b: usize, e: usize) -> T {
        let data = self.as_slice();
        let mut s = T::zero();
        for &v in &data[b..=e] {
            s = s + v;
        }
        s
    }

    fn mean_span(&self, b: usize, e: usize) -> f64 {
        lift(self.sum_span(b, e)) / (e - b + 1) as f64
    }
}
