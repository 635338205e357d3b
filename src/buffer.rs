//! Raw contiguous storage with exact-size reallocation
//!
//! [`RawBuffer`] owns the allocation behind an array and nothing else: it
//! tracks how many element slots exist, uses `realloc` so in-place growth is
//! possible, and never holds spare capacity. Element initialization and
//! drops are the owner's responsibility; the buffer only guarantees that
//! exactly `len` slots of properly aligned storage exist and that the
//! pointer is `None` iff `len == 0`.

use std::alloc::{self, Layout};
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::{ArrayError, Result};

pub(crate) struct RawBuffer<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
}

impl<T> RawBuffer<T> {
    /// Create an empty buffer without allocating
    #[inline]
    pub fn new() -> Self {
        Self { ptr: None, len: 0 }
    }

    /// Allocate uninitialized storage for exactly `len` elements
    pub fn allocate(len: usize) -> Result<Self> {
        if len == 0 {
            return Ok(Self::new());
        }
        let layout = Self::layout(len)?;
        let ptr = unsafe { alloc::alloc(layout) as *mut T };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(ArrayError::out_of_memory(layout.size()));
        };
        Ok(Self { ptr: Some(ptr), len })
    }

    /// Number of element slots
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Pointer to the first slot, or null when empty
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Mutable pointer to the first slot, or null when empty
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Resize the allocation to exactly `new_len` slots, preserving the
    /// bytes of the first `min(old, new)` elements.
    ///
    /// On failure the existing allocation is untouched. When shrinking, the
    /// caller must have dropped the elements in the truncated tail before
    /// calling; when growing, the caller must initialize the new slots
    /// before reading them.
    pub fn reallocate(&mut self, new_len: usize) -> Result<()> {
        if new_len == self.len {
            return Ok(());
        }
        if new_len == 0 {
            self.release();
            return Ok(());
        }
        log::trace!("buffer realloc: {} -> {} slots", self.len, new_len);
        let new_layout = Self::layout(new_len)?;
        let new_ptr = match self.ptr {
            Some(ptr) => {
                let old_layout = Self::layout(self.len)?;
                unsafe {
                    alloc::realloc(ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
                }
            }
            None => unsafe { alloc::alloc(new_layout) as *mut T },
        };
        let Some(new_ptr) = NonNull::new(new_ptr) else {
            return Err(ArrayError::out_of_memory(new_layout.size()));
        };
        self.ptr = Some(new_ptr);
        self.len = new_len;
        Ok(())
    }

    /// Free the allocation and return to the empty state
    pub fn release(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // layout construction succeeded at allocation time
            let layout = Layout::array::<T>(self.len).unwrap();
            unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
        }
        self.len = 0;
    }

    /// Detach the allocation, leaving the buffer empty.
    ///
    /// The returned pointer (when `Some`) was produced by the global
    /// allocator with `Layout::array::<T>(len)`.
    pub fn into_raw_parts(mut self) -> (Option<NonNull<T>>, usize) {
        let parts = (self.ptr.take(), self.len);
        self.len = 0;
        parts
    }

    /// Adopt an allocation produced by the global allocator with
    /// `Layout::array::<T>(len)`.
    ///
    /// # Safety
    ///
    /// `ptr` must satisfy exactly that contract, and ownership transfers to
    /// the buffer.
    pub unsafe fn from_raw_parts(ptr: Option<NonNull<T>>, len: usize) -> Self {
        debug_assert_eq!(ptr.is_none(), len == 0);
        Self { ptr, len }
    }

    fn layout(len: usize) -> Result<Layout> {
        Layout::array::<T>(len)
            .map_err(|_| ArrayError::out_of_memory(len.saturating_mul(mem::size_of::<T>())))
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.release();
    }
}

// Safety: RawBuffer owns its allocation exclusively
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
