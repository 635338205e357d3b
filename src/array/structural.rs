//! Structural mutation: growing, shrinking and reordering the buffer
//!
//! Every operation here reallocates to the exact resulting size. Argument
//! validation runs before the buffer is touched, so errors leave the array
//! unchanged. Allocation failures are equally non-destructive: grow paths
//! reallocate before any element is written, and shrink paths move the
//! survivors into a fresh buffer before the old one is released.

use std::mem;
use std::ops::RangeBounds;
use std::ptr;

use crate::buffer::RawBuffer;

use crate::error::{check_size, ArrayError, Result};
use crate::range::{resolve_index, resolve_range};

use super::Array;

impl<T> Array<T> {
    /// Append a single element at the end
    pub fn append(&mut self, value: T) -> Result<()> {
        let new_len = self
            .len()
            .checked_add(1)
            .ok_or_else(|| ArrayError::invalid_size(usize::MAX))?;
        check_size(new_len)?;
        self.buf.reallocate(new_len)?;
        unsafe { ptr::write(self.buf.as_mut_ptr().add(new_len - 1), value) };
        Ok(())
    }

    /// Append every element of a slice at the end, preserving order
    pub fn append_slice(&mut self, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        if values.is_empty() {
            return Ok(());
        }
        let old_len = self.len();
        let new_len = old_len
            .checked_add(values.len())
            .ok_or_else(|| ArrayError::invalid_size(usize::MAX))?;
        check_size(new_len)?;
        self.buf.reallocate(new_len)?;
        for (k, v) in values.iter().enumerate() {
            unsafe { ptr::write(self.buf.as_mut_ptr().add(old_len + k), v.clone()) };
        }
        Ok(())
    }

    /// Insert a single element at a signed index, right-shifting the
    /// elements at and after it.
    ///
    /// The index must resolve against the current length, so inserting into
    /// an empty array is rejected; use [`Array::append`] instead.
    pub fn insert(&mut self, value: T, at: isize) -> Result<()> {
        let old_len = self.len();
        let i = resolve_index(at, old_len)?;
        let new_len = old_len
            .checked_add(1)
            .ok_or_else(|| ArrayError::invalid_size(usize::MAX))?;
        check_size(new_len)?;
        self.buf.reallocate(new_len)?;
        unsafe {
            let p = self.buf.as_mut_ptr();
            ptr::copy(p.add(i), p.add(i + 1), old_len - i);
            ptr::write(p.add(i), value);
        }
        Ok(())
    }

    /// Insert every element of a slice at a signed index, preserving order.
    ///
    /// An empty slice is a no-op before any validation takes place.
    pub fn insert_slice(&mut self, values: &[T], at: isize) -> Result<()>
    where
        T: Clone,
    {
        if values.is_empty() {
            return Ok(());
        }
        let old_len = self.len();
        let i = resolve_index(at, old_len)?;
        let n = values.len();
        let new_len = old_len
            .checked_add(n)
            .ok_or_else(|| ArrayError::invalid_size(usize::MAX))?;
        check_size(new_len)?;
        self.buf.reallocate(new_len)?;
        unsafe {
            let p = self.buf.as_mut_ptr();
            ptr::copy(p.add(i), p.add(i + n), old_len - i);
            for (k, v) in values.iter().enumerate() {
                ptr::write(p.add(i + k), v.clone());
            }
        }
        Ok(())
    }

    /// Remove up to `count` elements starting at a signed index.
    ///
    /// The count is clamped so the erase never runs past the end. The tail
    /// shifts left and the buffer shrinks to the exact new size; erasing
    /// everything releases the buffer entirely.
    pub fn erase(&mut self, at: isize, count: usize) -> Result<()> {
        if self.is_empty() || count == 0 {
            return Ok(());
        }
        let len = self.len();
        let i = resolve_index(at, len)?;
        let c = count.min(len - i);
        let new_len = len - c;
        if new_len == 0 {
            self.clear();
            return Ok(());
        }
        let mut new_buf = RawBuffer::allocate(new_len)?;
        unsafe {
            let src = self.buf.as_ptr();
            let dst = new_buf.as_mut_ptr();
            ptr::copy_nonoverlapping(src, dst, i);
            ptr::copy_nonoverlapping(src.add(i + c), dst.add(i), len - i - c);
        }
        // the old buffer now holds only the erased elements; drop them and
        // let it release the allocation
        let mut old = mem::replace(&mut self.buf, new_buf);
        unsafe {
            let p = old.as_mut_ptr();
            for k in i..i + c {
                ptr::drop_in_place(p.add(k));
            }
        }
        Ok(())
    }

    /// Resize to exactly `len` elements.
    ///
    /// Shrinking truncates and discards the out-of-bounds tail; growing
    /// default-initializes the new slots. Resizing to 0 releases the buffer
    /// completely.
    pub fn resize(&mut self, len: usize) -> Result<()>
    where
        T: Default,
    {
        check_size(len)?;
        let old_len = self.len();
        if len == old_len {
            return Ok(());
        }
        if len == 0 {
            self.clear();
            return Ok(());
        }
        if len < old_len {
            let mut new_buf = RawBuffer::allocate(len)?;
            unsafe {
                ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), len);
            }
            let mut old = mem::replace(&mut self.buf, new_buf);
            unsafe {
                let p = old.as_mut_ptr();
                for k in len..old_len {
                    ptr::drop_in_place(p.add(k));
                }
            }
        } else {
            self.buf.reallocate(len)?;
            for k in old_len..len {
                unsafe { ptr::write(self.buf.as_mut_ptr().add(k), T::default()) };
            }
        }
        Ok(())
    }

    /// Remove all elements and release the buffer
    pub fn clear(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) };
        self.buf.release();
    }

    /// Reverse the elements within a range in place
    pub fn reverse<R: RangeBounds<isize>>(&mut self, range: R) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        let (b, e) = resolve_range(range, self.len())?;
        self.as_mut_slice()[b..=e].reverse();
        Ok(())
    }

    /// Copy a range out into a new array; the source is untouched
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> Result<Array<T>>
    where
        T: Clone,
    {
        if self.is_empty() {
            return Ok(Array::new());
        }
        let (b, e) = resolve_range(range, self.len())?;
        Array::from_slice(&self.as_slice()[b..=e])
    }

    /// Overwrite every element in a range equal to `search` with a clone of
    /// `replacement`.
    pub fn replace<R: RangeBounds<isize>>(
        &mut self,
        search: &T,
        replacement: &T,
        range: R,
    ) -> Result<()>
    where
        T: PartialEq + Clone,
    {
        if self.is_empty() {
            return Ok(());
        }
        let (b, e) = resolve_range(range, self.len())?;
        for v in &mut self.as_mut_slice()[b..=e] {
            if v == search {
                *v = replacement.clone();
            }
        }
        Ok(())
    }

    /// Collect the distinct values, in order of first occurrence
    pub fn unique(&self) -> Result<Array<T>>
    where
        T: PartialEq + Clone,
    {
        let mut out = Array::new();
        for v in self.iter() {
            if !out.as_slice().contains(v) {
                out.append(v.clone())?;
            }
        }
        Ok(out)
    }

    /// Gather the elements at the given signed indices into a new array.
    ///
    /// Indices may repeat and appear in any order; each one resolves
    /// independently, and the whole list is validated before anything is
    /// copied.
    pub fn select(&self, indices: &[isize]) -> Result<Array<T>>
    where
        T: Clone,
    {
        let mut resolved = Vec::with_capacity(indices.len());
        for &ix in indices {
            resolved.push(resolve_index(ix, self.len())?);
        }
        let mut out = Array::new();
        for i in resolved {
            out.append(self.as_slice()[i].clone())?;
        }
        Ok(out)
    }
}
