//! Element-wise operators with length broadcasting
//!
//! Arithmetic between arrays of unequal length pads the shorter operand
//! conceptually with the additive identity; comparison masks evaluate to
//! `false` beyond either operand; boolean mask combination treats missing
//! positions as transparent, letting the receiver's value pass through.
//!
//! Operator traits cannot surface a `Result`, so the allocation they need
//! behaves like `Clone`: an out-of-memory condition panics.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Not, Rem, RemAssign, Sub, SubAssign,
};

use num_traits::Num;

use crate::error::check_size;

use super::Array;

impl<T: Clone> Array<T> {
    /// Grow to `new_len` slots, filling the new tail with clones of `pad`.
    /// No-op when already at least that long.
    fn grow_padded(&mut self, new_len: usize, pad: T) {
        let old_len = self.len();
        if new_len <= old_len {
            return;
        }
        check_size(new_len).expect("array too large for in-place broadcast");
        self.buf
            .reallocate(new_len)
            .expect("allocation failed during in-place broadcast");
        for k in old_len..new_len {
            unsafe { std::ptr::write(self.buf.as_mut_ptr().add(k), pad.clone()) };
        }
    }
}

/// Combine two arrays position-wise into a zero-initialized result of the
/// longer length: the left operand is added in, then the right operand is
/// folded in with `op` over its own length.
fn broadcast_with<T: Copy + Num>(lhs: &Array<T>, rhs: &Array<T>, op: fn(T, T) -> T) -> Array<T> {
    let max_len = lhs.len().max(rhs.len());
    let mut out =
        Array::with_size(max_len, T::zero()).expect("allocation failed during broadcast");
    let data = out.as_mut_slice();
    for (i, &v) in lhs.iter().enumerate() {
        data[i] = data[i] + v;
    }
    for (i, &v) in rhs.iter().enumerate() {
        data[i] = op(data[i], v);
    }
    out
}

macro_rules! arith_ops {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident) => {
        impl<T: Copy + Num> $op_trait<T> for &Array<T> {
            type Output = Array<T>;

            fn $op(self, rhs: T) -> Array<T> {
                let mut out = self.clone();
                for v in out.as_mut_slice() {
                    *v = (*v).$op(rhs);
                }
                out
            }
        }

        impl<'b, T: Copy + Num> $op_trait<&'b Array<T>> for &Array<T> {
            type Output = Array<T>;

            fn $op(self, rhs: &'b Array<T>) -> Array<T> {
                broadcast_with(self, rhs, T::$op)
            }
        }

        impl<T: Copy + Num> $assign_trait<T> for Array<T> {
            fn $assign(&mut self, rhs: T) {
                for v in self.as_mut_slice() {
                    *v = (*v).$op(rhs);
                }
            }
        }

        impl<T: Copy + Num> $assign_trait<&Array<T>> for Array<T> {
            fn $assign(&mut self, rhs: &Array<T>) {
                self.grow_padded(rhs.len(), T::zero());
                let data = self.as_mut_slice();
                for (i, &v) in rhs.iter().enumerate() {
                    data[i] = data[i].$op(v);
                }
            }
        }
    };
}

arith_ops!(Add, add, AddAssign, add_assign);
arith_ops!(Sub, sub, SubAssign, sub_assign);
arith_ops!(Mul, mul, MulAssign, mul_assign);
arith_ops!(Div, div, DivAssign, div_assign);
arith_ops!(Rem, rem, RemAssign, rem_assign);

impl<T: Copy + PartialOrd> Array<T> {
    fn compare_with(&self, other: &Array<T>, op: fn(&T, &T) -> bool) -> Array<bool> {
        let max_len = self.len().max(other.len());
        let mut out =
            Array::with_size(max_len, false).expect("allocation failed during broadcast");
        let data = out.as_mut_slice();
        for i in 0..max_len {
            data[i] = match (self.as_slice().get(i), other.as_slice().get(i)) {
                (Some(a), Some(b)) => op(a, b),
                _ => false,
            };
        }
        out
    }

    fn compare_scalar(&self, value: T, op: fn(&T, &T) -> bool) -> Array<bool> {
        let mut out =
            Array::with_size(self.len(), false).expect("allocation failed during broadcast");
        let data = out.as_mut_slice();
        for (i, v) in self.iter().enumerate() {
            data[i] = op(v, &value);
        }
        out
    }

    /// Position-wise `==` mask; positions beyond either operand are `false`
    pub fn eq_mask(&self, other: &Array<T>) -> Array<bool> {
        self.compare_with(other, |a, b| a == b)
    }

    /// Position-wise `!=` mask; positions beyond either operand are `false`
    pub fn ne_mask(&self, other: &Array<T>) -> Array<bool> {
        self.compare_with(other, |a, b| a != b)
    }

    /// Position-wise `<` mask; positions beyond either operand are `false`
    pub fn lt_mask(&self, other: &Array<T>) -> Array<bool> {
        self.compare_with(other, |a, b| a < b)
    }

    /// Position-wise `<=` mask; positions beyond either operand are `false`
    pub fn le_mask(&self, other: &Array<T>) -> Array<bool> {
        self.compare_with(other, |a, b| a <= b)
    }

    /// Position-wise `>` mask; positions beyond either operand are `false`
    pub fn gt_mask(&self, other: &Array<T>) -> Array<bool> {
        self.compare_with(other, |a, b| a > b)
    }

    /// Position-wise `>=` mask; positions beyond either operand are `false`
    pub fn ge_mask(&self, other: &Array<T>) -> Array<bool> {
        self.compare_with(other, |a, b| a >= b)
    }

    /// Mask of positions equal to `value`
    pub fn eq_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(value, |a, b| a == b)
    }

    /// Mask of positions not equal to `value`
    pub fn ne_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(value, |a, b| a != b)
    }

    /// Mask of positions less than `value`
    pub fn lt_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(value, |a, b| a < b)
    }

    /// Mask of positions less than or equal to `value`
    pub fn le_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(value, |a, b| a <= b)
    }

    /// Mask of positions greater than `value`
    pub fn gt_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(value, |a, b| a > b)
    }

    /// Mask of positions greater than or equal to `value`
    pub fn ge_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(value, |a, b| a >= b)
    }
}

/// Combine two masks into a false-initialized result of the longer length:
/// the receiver's values are laid down first, then the other mask is folded
/// in over its own length.
fn broadcast_mask(lhs: &Array<bool>, rhs: &Array<bool>, op: fn(bool, bool) -> bool) -> Array<bool> {
    let max_len = lhs.len().max(rhs.len());
    let mut out = Array::with_size(max_len, false).expect("allocation failed during broadcast");
    let data = out.as_mut_slice();
    for (i, &v) in lhs.iter().enumerate() {
        data[i] = v;
    }
    for (i, &v) in rhs.iter().enumerate() {
        data[i] = op(data[i], v);
    }
    out
}

impl Not for &Array<bool> {
    type Output = Array<bool>;

    fn not(self) -> Array<bool> {
        let mut out = self.clone();
        for v in out.as_mut_slice() {
            *v = !*v;
        }
        out
    }
}

macro_rules! mask_ops {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident) => {
        impl<'b> $op_trait<&'b Array<bool>> for &Array<bool> {
            type Output = Array<bool>;

            fn $op(self, rhs: &'b Array<bool>) -> Array<bool> {
                broadcast_mask(self, rhs, bool::$op)
            }
        }

        impl $op_trait<bool> for &Array<bool> {
            type Output = Array<bool>;

            fn $op(self, rhs: bool) -> Array<bool> {
                let mut out = self.clone();
                for v in out.as_mut_slice() {
                    *v = (*v).$op(rhs);
                }
                out
            }
        }

        impl $assign_trait<&Array<bool>> for Array<bool> {
            fn $assign(&mut self, rhs: &Array<bool>) {
                self.grow_padded(rhs.len(), false);
                let data = self.as_mut_slice();
                for (i, &v) in rhs.iter().enumerate() {
                    data[i] = data[i].$op(v);
                }
            }
        }

        impl $assign_trait<bool> for Array<bool> {
            fn $assign(&mut self, rhs: bool) {
                for v in self.as_mut_slice() {
                    *v = (*v).$op(rhs);
                }
            }
        }
    };
}

mask_ops!(BitAnd, bitand, BitAndAssign, bitand_assign);
mask_ops!(BitOr, bitor, BitOrAssign, bitor_assign);
mask_ops!(BitXor, bitxor, BitXorAssign, bitxor_assign);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_arithmetic() {
        let a = Array::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!((&a + 10).as_slice(), &[11, 12, 13]);
        assert_eq!((&a - 1).as_slice(), &[0, 1, 2]);
        assert_eq!((&a * 3).as_slice(), &[3, 6, 9]);
        assert_eq!((&a / 2).as_slice(), &[0, 1, 1]);
        assert_eq!((&a % 2).as_slice(), &[1, 0, 1]);
        // source untouched
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_scalar_assign() {
        let mut a = Array::from_slice(&[1, 2, 3]).unwrap();
        a += 10;
        assert_eq!(a.as_slice(), &[11, 12, 13]);
        a *= 2;
        assert_eq!(a.as_slice(), &[22, 24, 26]);
    }

    #[test]
    fn test_broadcast_add_unequal_lengths() {
        let a = Array::from_slice(&[1, 2, 3]).unwrap();
        let b = Array::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!((&a + &b).as_slice(), &[2, 4, 6, 4, 5]);
        assert_eq!((&b + &a).as_slice(), &[2, 4, 6, 4, 5]);
    }

    #[test]
    fn test_broadcast_sub_and_mul() {
        let a = Array::from_slice(&[5, 5, 5]).unwrap();
        let b = Array::from_slice(&[1, 2]).unwrap();
        // the third position has no right-hand operand and passes through
        assert_eq!((&a - &b).as_slice(), &[4, 3, 5]);
        assert_eq!((&a * &b).as_slice(), &[5, 10, 5]);
        // a shorter left side is padded with zeros
        assert_eq!((&b - &a).as_slice(), &[-4, -3, -5]);
    }

    #[test]
    fn test_broadcast_div_shorter_divisor() {
        let a = Array::from_slice(&[8, 6, 9]).unwrap();
        let b = Array::from_slice(&[2, 3]).unwrap();
        assert_eq!((&a / &b).as_slice(), &[4, 2, 9]);
    }

    #[test]
    fn test_inplace_array_ops_grow_receiver() {
        let mut a = Array::from_slice(&[1, 2]).unwrap();
        let b = Array::from_slice(&[10, 10, 10, 10]).unwrap();
        a += &b;
        assert_eq!(a.as_slice(), &[11, 12, 10, 10]);

        let mut c = Array::from_slice(&[1, 2, 3, 4]).unwrap();
        let d = Array::from_slice(&[10, 10]).unwrap();
        c += &d;
        // positions beyond the right operand stay untouched
        assert_eq!(c.as_slice(), &[11, 12, 3, 4]);
    }

    #[test]
    fn test_inplace_sub_mul() {
        let mut a = Array::from_slice(&[10, 20]).unwrap();
        a -= &Array::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(a.as_slice(), &[9, 18, -3]);
        let mut b = Array::from_slice(&[3, 3, 3]).unwrap();
        b *= &Array::from_slice(&[2, 2]).unwrap();
        assert_eq!(b.as_slice(), &[6, 6, 3]);
    }

    #[test]
    fn test_comparison_masks_with_array() {
        let a = Array::from_slice(&[1, 5, 3]).unwrap();
        let b = Array::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(a.eq_mask(&b).as_slice(), &[true, false, true, false]);
        assert_eq!(a.gt_mask(&b).as_slice(), &[false, true, false, false]);
        assert_eq!(a.le_mask(&b).as_slice(), &[true, false, true, false]);
        // positions beyond either operand are false
        assert_eq!(a.ne_mask(&b).as_slice(), &[false, true, false, false]);
    }

    #[test]
    fn test_comparison_masks_with_scalar() {
        let a = Array::from_slice(&[1, 5, 3]).unwrap();
        assert_eq!(a.eq_scalar(3).as_slice(), &[false, false, true]);
        assert_eq!(a.lt_scalar(4).as_slice(), &[true, false, true]);
        assert_eq!(a.ge_scalar(3).as_slice(), &[false, true, true]);
        assert_eq!(a.ne_scalar(5).as_slice(), &[true, false, true]);
        assert_eq!(a.gt_scalar(0).len(), 3);
        assert_eq!(a.le_scalar(1).as_slice(), &[true, false, false]);
    }

    #[test]
    fn test_mask_not() {
        let m = Array::from_slice(&[true, false, true]).unwrap();
        assert_eq!((!&m).as_slice(), &[false, true, false]);
    }

    #[test]
    fn test_mask_or_broadcasts_transparently() {
        let a = Array::from_slice(&[true, false, true]).unwrap();
        let b = Array::from_slice(&[false, true]).unwrap();
        assert_eq!((&a | &b).as_slice(), &[true, true, true]);
        assert_eq!((&b | &a).as_slice(), &[true, true, true]);
    }

    #[test]
    fn test_mask_and_beyond_operand_passes_through() {
        let a = Array::from_slice(&[true, true, true]).unwrap();
        let b = Array::from_slice(&[false, true]).unwrap();
        // the third position is never combined, so the receiver's value stays
        assert_eq!((&a & &b).as_slice(), &[false, true, true]);
    }

    #[test]
    fn test_mask_xor() {
        let a = Array::from_slice(&[true, false]).unwrap();
        let b = Array::from_slice(&[true, true, true]).unwrap();
        assert_eq!((&a ^ &b).as_slice(), &[false, true, true]);
    }

    #[test]
    fn test_mask_scalar_ops() {
        let a = Array::from_slice(&[true, false]).unwrap();
        assert_eq!((&a | true).as_slice(), &[true, true]);
        assert_eq!((&a & true).as_slice(), &[true, false]);
        assert_eq!((&a ^ true).as_slice(), &[false, true]);
    }

    #[test]
    fn test_mask_assign_ops() {
        let mut a = Array::from_slice(&[true, false]).unwrap();
        a |= &Array::from_slice(&[false, true, true]).unwrap();
        assert_eq!(a.as_slice(), &[true, true, true]);

        let mut b = Array::from_slice(&[true, true, true]).unwrap();
        b &= &Array::from_slice(&[false, true]).unwrap();
        assert_eq!(b.as_slice(), &[false, true, true]);

        let mut c = Array::from_slice(&[true, false]).unwrap();
        c ^= &Array::from_slice(&[true, true, true]).unwrap();
        assert_eq!(c.as_slice(), &[false, true, true]);
    }

    #[test]
    fn test_mask_scalar_assign_ops() {
        let mut a = Array::from_slice(&[true, false]).unwrap();
        a |= true;
        assert_eq!(a.as_slice(), &[true, true]);
        a &= false;
        assert_eq!(a.as_slice(), &[false, false]);
        a ^= true;
        assert_eq!(a.as_slice(), &[true, true]);
    }

    #[test]
    fn test_empty_operands() {
        let a: Array<i32> = Array::new();
        let b = Array::from_slice(&[1, 2]).unwrap();
        assert_eq!((&a + &b).as_slice(), &[1, 2]);
        assert_eq!((&b + &a).as_slice(), &[1, 2]);
        assert!((&a + &a).is_empty());
        let mut c: Array<i32> = Array::new();
        c += &b;
        assert_eq!(c.as_slice(), &[1, 2]);
    }
}
