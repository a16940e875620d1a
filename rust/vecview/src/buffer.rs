//! Fixed-size element storage shared by views.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use vecview_common::{Result, error::Error};

/// A contiguous block of element slots with a size fixed at allocation.
///
/// A buffer is never resized in place: a view that outgrows its buffer
/// moves to a new one. Element writes go through interior mutability, so
/// every view holding the same `Rc<Buffer>` observes them. The buffer is
/// freed once the last handle drops.
///
/// Not `Send`/`Sync`: sharing is single-threaded, and callers that need
/// cross-thread access bring their own synchronization.
pub struct Buffer<T> {
    elems: RefCell<Box<[T]>>,
}

impl<T> Buffer<T> {
    /// Creates a buffer that takes ownership of `vec`; the size is fixed
    /// to `vec.len()`.
    pub fn from_vec(vec: Vec<T>) -> Rc<Buffer<T>> {
        Rc::new(Buffer {
            elems: RefCell::new(vec.into_boxed_slice()),
        })
    }

    /// Creates a buffer containing a copy of `slice`.
    pub fn from_slice(slice: &[T]) -> Rc<Buffer<T>>
    where
        T: Clone,
    {
        Buffer::from_vec(slice.to_vec())
    }

    /// Creates a buffer of `size` slots, each holding the element type's
    /// default value.
    pub fn zeroed(size: usize) -> Rc<Buffer<T>>
    where
        T: Default,
    {
        Buffer::from_vec((0..size).map(|_| T::default()).collect())
    }

    /// Returns the fixed number of element slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.elems.borrow().len()
    }

    /// Reads the element at `index`.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        let elems = self.elems.borrow();
        if index < elems.len() {
            Ok(elems[index].clone())
        } else {
            Err(Error::index_out_of_range(index, elems.len()))
        }
    }

    /// Writes `value` at `index`. The write is visible to every view over
    /// this buffer whose range covers `index`.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut elems = self.elems.borrow_mut();
        if index < elems.len() {
            elems[index] = value;
            Ok(())
        } else {
            Err(Error::index_out_of_range(index, elems.len()))
        }
    }

    /// Copies the buffer contents into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elems.borrow().to_vec()
    }

    /// Reads a single slot. Callers have already bounds-checked `index`.
    pub(crate) fn read(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.elems.borrow()[index].clone()
    }

    /// Overwrites the slots starting at `start` with `values`.
    pub(crate) fn write_at(&self, start: usize, values: &[T])
    where
        T: Clone,
    {
        let mut elems = self.elems.borrow_mut();
        elems[start..start + values.len()].clone_from_slice(values);
    }

    /// Copies the slots in `range` into a `Vec`.
    pub(crate) fn copy_range(&self, range: Range<usize>) -> Vec<T>
    where
        T: Clone,
    {
        self.elems.borrow()[range].to_vec()
    }

    /// Runs `f` against the raw slots under a shared borrow.
    pub(crate) fn with_elems<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.elems.borrow())
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elems = self.elems.borrow();
        f.debug_tuple("Buffer").field(&&**elems).finish()
    }
}

impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        *self.elems.borrow() == *other.elems.borrow()
    }
}

impl<T: Eq> Eq for Buffer<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use vecview_common::error::ErrorKind;

    #[test]
    fn fixed_size_storage() {
        let buf = Buffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buf.size(), 3);
        assert_eq!(buf.get(0).unwrap(), 1);
        assert_eq!(buf.get(2).unwrap(), 3);
        assert_eq!(buf.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn zeroed_fills_with_default() {
        let buf = Buffer::<i32>::zeroed(4);
        assert_eq!(buf.size(), 4);
        assert_eq!(buf.to_vec(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn set_is_observed_through_other_handles() {
        let buf = Buffer::from_vec(vec![1, 2, 3]);
        let other = buf.clone();
        buf.set(1, 20).unwrap();
        assert_eq!(other.get(1).unwrap(), 20);
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let buf = Buffer::from_vec(vec![5, 0, 10]);
        let err = buf.set(3, 20).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfRange {
                index: 3,
                length: 3
            }
        ));
        assert!(buf.get(3).is_err());
        assert_eq!(buf.to_vec(), vec![5, 0, 10]);
    }

    #[test]
    fn zero_sized_buffer() {
        let buf = Buffer::<u8>::zeroed(0);
        assert_eq!(buf.size(), 0);
        assert!(buf.get(0).is_err());
        assert!(buf.to_vec().is_empty());
    }

    #[test]
    fn debug_prints_elements() {
        let buf = Buffer::from_vec(vec![1, 2]);
        assert_eq!(format!("{buf:?}"), "Buffer([1, 2])");
    }
}
