//! Conversions between `Array<T>` and the surrounding ecosystem
//!
//! These are pure element-wise bridges: imports copy the source in
//! iteration order, exports produce a new container in index order. Any
//! iterable collects into an array through `FromIterator`, which covers
//! vectors, linked lists, ordered sets and literal lists alike.

use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use num_traits::AsPrimitive;

use crate::buffer::RawBuffer;
use crate::error::{check_size, Result};

use super::Array;

impl<T> Array<T> {
    /// Consume the array and return its elements as a `Vec`, reusing the
    /// allocation.
    pub fn into_vec(mut self) -> Vec<T> {
        let buf = mem::replace(&mut self.buf, RawBuffer::new());
        let (ptr, len) = buf.into_raw_parts();
        match ptr {
            // the buffer was produced by the global allocator with the
            // exact layout Vec expects, capacity == len
            Some(p) => unsafe { Vec::from_raw_parts(p.as_ptr(), len, len) },
            None => Vec::new(),
        }
    }

    /// Copy the elements into a new `Vec`
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Re-type the elements with native numeric cast semantics
    /// (truncation and wrapping included, exactly like `as`).
    pub fn cast<U: Copy + 'static>(&self) -> Result<Array<U>>
    where
        T: AsPrimitive<U>,
    {
        let mut buf: RawBuffer<U> = RawBuffer::allocate(self.len())?;
        for (i, &v) in self.iter().enumerate() {
            unsafe { ptr::write(buf.as_mut_ptr().add(i), v.as_()) };
        }
        Ok(Array { buf })
    }
}

impl<T> From<Vec<T>> for Array<T> {
    /// Take over a vector's elements, trimming the allocation to exact size.
    ///
    /// # Panics
    ///
    /// Panics if the vector is longer than the maximum array size.
    fn from(values: Vec<T>) -> Self {
        check_size(values.len()).expect("vector exceeds maximum array size");
        let boxed = values.into_boxed_slice();
        let len = boxed.len();
        if len == 0 {
            return Array::new();
        }
        let ptr = NonNull::new(Box::into_raw(boxed) as *mut T);
        Self {
            buf: unsafe { RawBuffer::from_raw_parts(ptr, len) },
        }
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    /// # Panics
    ///
    /// Panics if the slice is oversized or the allocation fails.
    fn from(values: &[T]) -> Self {
        Array::from_slice(values).expect("allocation failed building Array from slice")
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Self {
        Vec::from(values).into()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

impl<T: Clone> Extend<T> for Array<T> {
    /// # Panics
    ///
    /// Panics if growing the array fails; use [`Array::append_slice`] for a
    /// fallible bulk append.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.append(v).expect("allocation failed extending Array");
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
