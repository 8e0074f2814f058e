use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use tracing::trace;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds, NoSuchElement, ZeroCapacity,
};
use crate::util::result::ResultExtension;

/// The capacity of an ArrayList created with [`ArrayList::new`], and of one that has just been
/// cleared.
pub const DEFAULT_CAP: usize = 5;

const MAX_SIZE: usize = isize::MAX as usize;

/// A growable list stored in a single contiguous allocation.
///
/// The first `len` slots of the backing store are always initialized and every slot after them is
/// uninitialized, so there is never any ambiguity about which slots hold values. When the list is
/// full, the capacity grows to `cap * 3 / 2 + 1`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `try_get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `set` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct ArrayList<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with capacity [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 5);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList {
            buf: Self::alloc(DEFAULT_CAP),
            len: 0,
        }
    }

    /// Creates a new, empty ArrayList with capacity exactly equal to the provided value.
    ///
    /// # Errors
    /// Returns [`ZeroCapacity`] if `cap` is 0.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::contiguous::ArrayList;
    /// let list = ArrayList::<u8>::try_with_cap(3).unwrap();
    /// assert_eq!(list.cap(), 3);
    /// assert!(ArrayList::<u8>::try_with_cap(0).is_err());
    /// ```
    pub fn try_with_cap(cap: usize) -> Result<ArrayList<T>, ZeroCapacity> {
        if cap == 0 {
            return Err(ZeroCapacity);
        }

        Ok(ArrayList {
            buf: Self::alloc(cap),
            len: 0,
        })
    }

    /// Creates a new, empty ArrayList with capacity exactly equal to the provided value.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Returns the length of the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// assert!(list.is_empty());
    /// list.push(1_u8);
    /// assert!(!list.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the ArrayList can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Pushes the provided value onto the end of the ArrayList, growing it if required.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the ArrayList is full and can't grow any further. The value
    /// is dropped in this case.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.grow()?;
        }

        self.buf[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Pushes the provided value onto the end of the ArrayList, growing it if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_cap(2);
    /// for i in 0..3 {
    ///     list.push(i);
    /// }
    /// assert_eq!(&*list, &[0, 1, 2]);
    /// assert_eq!(list.cap(), 4);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pops the last value off the end of the ArrayList, returning it if the ArrayList isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The slot at the old len - 1 is initialized. Decrementing len first means it is
        // treated as uninitialized from now on, so the value is moved out exactly once.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Inserts the provided value at `index`, moving all following values back by one. An index
    /// equal to the length appends the value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, or [`CapacityOverflow`] if the ArrayList is
    /// full and can't grow any further.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }
            .into());
        }

        if self.len == self.cap() {
            self.grow()?;
        }

        self.buf[self.len].write(value);
        self.len += 1;
        // Move the new value from the end down to index.
        self.buf[index..self.len].rotate_right(1);
        Ok(())
    }

    /// Inserts the provided value at `index`, moving all following values back by one.
    ///
    /// # Panics
    /// Panics if `index > len` or if the ArrayList can't grow any further.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([0, 1, 2]);
    /// list.insert(1, 100);
    /// list.insert(4, 200);
    /// assert_eq!(&*list, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.deref().get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.deref_mut().get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.try_get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Removes the element at `index`, moving all following values forward to fill the gap.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // Move the removed value from index to the end.
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        // SAFETY: index < old len, so the slots index..old len were initialized before rotating
        // and the removed value is now in the slot at the new len, which is no longer considered
        // initialized.
        Ok(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Removes the element at `index`, moving all following values forward to fill the gap.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = "Hello world!".chars().collect();
    /// assert_eq!(list.remove(1), 'e');
    /// assert_eq!(list.remove(4), ' ');
    /// assert_eq!(list, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`NoSuchElement`] if the ArrayList is empty.
    pub fn try_first(&self) -> Result<&T, NoSuchElement> {
        self.deref().first().ok_or(NoSuchElement)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`NoSuchElement`] if the ArrayList is empty.
    pub fn try_last(&self) -> Result<&T, NoSuchElement> {
        self.deref().last().ok_or(NoSuchElement)
    }

    /// Returns true if any element of the ArrayList is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Drops every element and resets the capacity to [`DEFAULT_CAP`].
    pub fn clear(&mut self) {
        trace!(len = self.len, cap = self.cap(), "clearing array list");
        *self = ArrayList::new();
    }

    /// Grows the backing store to `cap * 3 / 2 + 1`, moving all elements across.
    pub(crate) fn grow(&mut self) -> Result<(), CapacityOverflow> {
        let old_cap = self.cap();
        let new_cap = old_cap
            .checked_mul(3)
            .and_then(|cap| (cap / 2).checked_add(1))
            .ok_or(CapacityOverflow)?;

        if size_of::<T>() != 0 {
            match new_cap.checked_mul(size_of::<T>()) {
                Some(size) if size <= MAX_SIZE => (),
                _ => return Err(CapacityOverflow),
            }
        }

        trace!(old_cap, new_cap, len = self.len, "growing array list");

        let mut buf = Self::alloc(new_cap);
        buf[..self.len].swap_with_slice(&mut self.buf[..self.len]);
        // The old store now only holds uninitialized slots, which have no drop glue.
        self.buf = buf;
        Ok(())
    }

    /// Checks that the provided index refers to an element of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn alloc(cap: usize) -> Box<[MaybeUninit<T>]> {
        Box::new_uninit_slice(cap)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[..self.len] {
            // SAFETY: All values less than len are initialized and aren't accessed again.
            unsafe { slot.assume_init_drop() };
        }

        // Implicitly drop self.buf, which only contains MaybeUninit values with no drop glue.
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = ArrayList {
            buf: Self::alloc(cmp::max(iter.size_hint().0, DEFAULT_CAP)),
            len: 0,
        };

        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the same layout as T.
        // The borrow checker enforces that self isn't mutated while the slice is alive.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the same layout as T.
        // The borrow checker enforces that self isn't accessed while the slice is alive.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for ArrayList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList {
            buf: Self::alloc(self.cap()),
            len: 0,
        };

        for value in self.iter() {
            list.push(value.clone());
        }

        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
