use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::slice;

use super::ArrayList;

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The iterator takes over responsibility for dropping the initialized values.
        let mut list = ManuallyDrop::new(self);
        IntoIter {
            buf: mem::take(&mut list.buf),
            start: 0,
            end: list.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of an [`ArrayList`], from front to back.
pub struct IntoIter<T> {
    // Only the slots start..end are initialized.
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining items of this iterator as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The slots start..end are initialized and MaybeUninit<T> has the same layout as
        // T.
        unsafe {
            slice::from_raw_parts(
                self.buf.as_ptr().add(self.start).cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;
        // SAFETY: index was in start..end, so the slot is initialized, and incrementing start
        // ensures that it is never read again.
        Some(unsafe { self.buf[index].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The old end - 1 was in start..end, so the slot is initialized, and decrementing
        // end ensures that it is never read again.
        Some(unsafe { self.buf[self.end].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.start..self.end] {
            // SAFETY: All values in start..end are initialized and aren't accessed again.
            unsafe { slot.assume_init_drop() };
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
