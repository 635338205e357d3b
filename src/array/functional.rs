//! Functional combinators
//!
//! Callbacks receive the elements by immutable reference, so none of them
//! can mutate the array they were invoked on; captured state is fair game.

use crate::error::Result;

use super::Array;

impl<T> Array<T> {
    /// Invoke `f` on every element in index order
    pub fn for_each<F: FnMut(&T)>(&self, mut f: F) {
        for v in self.iter() {
            f(v);
        }
    }

    /// Invoke `f` on every element together with its canonical index
    pub fn for_each_indexed<F: FnMut(&T, usize)>(&self, mut f: F) {
        for (i, v) in self.iter().enumerate() {
            f(v, i);
        }
    }

    /// Invoke `f` on every element with its index and the whole array
    pub fn for_each_with<F: FnMut(&T, usize, &Array<T>)>(&self, mut f: F) {
        for (i, v) in self.iter().enumerate() {
            f(v, i, self);
        }
    }

    /// Collect the elements `predicate` accepts into a new array
    pub fn filter<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> Result<Array<T>>
    where
        T: Clone,
    {
        let mut out = Array::new();
        for v in self.iter() {
            if predicate(v) {
                out.append(v.clone())?;
            }
        }
        Ok(out)
    }

    /// Collect the elements an index-aware `predicate` accepts
    pub fn filter_indexed<F: FnMut(&T, usize) -> bool>(&self, mut predicate: F) -> Result<Array<T>>
    where
        T: Clone,
    {
        let mut out = Array::new();
        for (i, v) in self.iter().enumerate() {
            if predicate(v, i) {
                out.append(v.clone())?;
            }
        }
        Ok(out)
    }

    /// Collect the elements a `predicate` with the whole-array view accepts
    pub fn filter_with<F: FnMut(&T, usize, &Array<T>) -> bool>(
        &self,
        mut predicate: F,
    ) -> Result<Array<T>>
    where
        T: Clone,
    {
        let mut out = Array::new();
        for (i, v) in self.iter().enumerate() {
            if predicate(v, i, self) {
                out.append(v.clone())?;
            }
        }
        Ok(out)
    }

    /// Transform every element into a possibly different type
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Result<Array<U>> {
        let mut out = Array::new();
        for v in self.iter() {
            out.append(f(v))?;
        }
        Ok(out)
    }

    /// Transform every element together with its canonical index
    pub fn map_indexed<U, F: FnMut(&T, usize) -> U>(&self, mut f: F) -> Result<Array<U>> {
        let mut out = Array::new();
        for (i, v) in self.iter().enumerate() {
            out.append(f(v, i))?;
        }
        Ok(out)
    }

    /// Transform every element with its index and the whole array in view
    pub fn map_with<U, F: FnMut(&T, usize, &Array<T>) -> U>(&self, mut f: F) -> Result<Array<U>> {
        let mut out = Array::new();
        for (i, v) in self.iter().enumerate() {
            out.append(f(v, i, self))?;
        }
        Ok(out)
    }
}
