//! Growable double-ended sequence with explicit capacity control.
//!
//! [`Sequence`] keeps its elements in a contiguous run of slots. The occupied slots are
//! always the prefix `[0, len)`; the remaining slots up to `capacity` are empty. Slot
//! order is logical order, so the front is slot `0` and the back is slot `len - 1`.
//!
//! # Growth
//! When a push finds every slot occupied the sequence grows by exactly **one** slot.
//! Capacity is otherwise only changed by [`resize`](Sequence::resize), so a sequence
//! created with the default capacity holds `n` slots after `n` pushes.
//!
//! # Ownership
//! [`push_back`](Sequence::push_back) / [`push_front`](Sequence::push_front) move the
//! element in; on failure it is handed back inside a [`PushError`].
//! [`push_back_copy`](Sequence::push_back_copy) / [`push_front_copy`](Sequence::push_front_copy)
//! store a clone and leave the caller's value untouched. Pops move the element out.
//!
//! # Released sequences
//! [`release`](Sequence::release) frees every element and the backing store, leaving a
//! header with no slots. Mutating a released header fails with
//! [`SequenceError::NullReceiver`]; inspecting it yields `None`.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::slice;
use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::error::{PushError, Result, SequenceError};

/// Capacity used by [`Sequence::new`] and [`Sequence::boxed`].
pub const DEFAULT_CAPACITY: usize = 1;

// ─── AnySequence ──────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended sequence types.
///
/// Implemented by both `VecDeque<T>` and [`Sequence<T>`] so code can push and pop at
/// either end without knowing which backend it holds.
pub trait AnySequence<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;
    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T) -> Result<(), PushError<T>>;
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T) -> Result<(), PushError<T>>;
    /// Removes and returns the back element, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Drops all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
}

impl<T> AnySequence<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) -> Result<(), PushError<T>> {
        self.push_back(item);
        Ok(())
    }
    fn push_front(&mut self, item: T) -> Result<(), PushError<T>> {
        self.push_front(item);
        Ok(())
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

// ─── Sequence ─────────────────────────────────────────────────────────────────

/// A double-ended sequence of owned elements, usable as a queue or a deque.
///
/// # Representation
/// | Field | Meaning |
/// |-------|---------|
/// | `slots` | `capacity` slots; `Some` in `[0, len)`, `None` in `[len, capacity)` |
/// | `len` | number of occupied slots |
///
/// A header with no slots at all is *released*.
///
/// # Constructors
/// | Constructor | Header | Capacity |
/// |-------------|--------|----------|
/// | [`new`](Sequence::new) | value | [`DEFAULT_CAPACITY`] |
/// | [`with_capacity`](Sequence::with_capacity) | value | given |
/// | [`boxed`](Sequence::boxed) | `Box` | [`DEFAULT_CAPACITY`] |
/// | [`boxed_with_capacity`](Sequence::boxed_with_capacity) | `Box` | given |
/// | [`init`](Sequence::init) | caller-owned, in place | given |
/// | [`init_boxed`](Sequence::init_boxed) | `Box` through an out-parameter | given |
#[derive(Clone)]
pub struct Sequence<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

/// FIFO view of a [`Sequence`].
pub type Queue<T> = Sequence<T>;

/// Double-ended view of a [`Sequence`].
pub type Deque<T> = Sequence<T>;

impl<T> AnySequence<T> for Sequence<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) -> Result<(), PushError<T>> {
        self.push_back(item)
    }
    fn push_front(&mut self, item: T) -> Result<(), PushError<T>> {
        self.push_front(item)
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.drop_elements();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> Sequence<T> {
    /// A header with no backing store, waiting for [`init`](Sequence::init).
    pub const fn unallocated() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty sequence with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with exactly `capacity` slots.
    ///
    /// # Errors
    /// [`SequenceError::ZeroCapacity`] if `capacity == 0`,
    /// [`SequenceError::AllocFailed`] if the slots cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            slots: Self::alloc_slots(capacity)?,
            len: 0,
        })
    }

    /// Heap-allocated sequence with [`DEFAULT_CAPACITY`] slots.
    pub fn boxed() -> Result<Box<Self>> {
        Self::boxed_with_capacity(DEFAULT_CAPACITY)
    }

    /// Heap-allocated sequence with exactly `capacity` slots.
    pub fn boxed_with_capacity(capacity: usize) -> Result<Box<Self>> {
        Self::with_capacity(capacity).map(Box::new)
    }

    /// Initializes a caller-owned header in place.
    ///
    /// The previous contents of `dest` are dropped only if initialization succeeds.
    pub fn init(dest: Option<&mut Self>, capacity: usize) -> Result<()> {
        let dest = dest.ok_or(SequenceError::NullReceiver)?;
        *dest = Self::with_capacity(capacity)?;
        Ok(())
    }

    /// Allocates a new sequence and stores it in `out`.
    ///
    /// `out` holds the new sequence on success and `None` on any allocation or
    /// capacity failure.
    pub fn init_boxed(out: Option<&mut Option<Box<Self>>>, capacity: usize) -> Result<()> {
        let out = out.ok_or(SequenceError::NullReceiver)?;
        match Self::boxed_with_capacity(capacity) {
            Ok(seq) => {
                *out = Some(seq);
                Ok(())
            }
            Err(err) => {
                *out = None;
                Err(err)
            }
        }
    }

    fn alloc_slots(capacity: usize) -> Result<Vec<Option<T>>> {
        if capacity == 0 {
            return Err(SequenceError::ZeroCapacity);
        }
        let mut slots = Vec::new();
        if let Err(err) = slots.try_reserve_exact(capacity) {
            warn!("failed to allocate {capacity} sequence slots: {err}");
            return Err(err.into());
        }
        slots.resize_with(capacity, || None);
        Ok(slots)
    }

    #[inline(always)]
    fn ensure_allocated(&self) -> Result<()> {
        if self.slots.is_empty() {
            Err(SequenceError::NullReceiver)
        } else {
            Ok(())
        }
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, occupied or not.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Size in bytes of one stored element.
    #[inline(always)]
    pub const fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Returns `true` once [`release`](Sequence::release) has run, or before
    /// an [`unallocated`](Sequence::unallocated) header has been initialized.
    #[inline(always)]
    pub fn is_released(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.slots[index].as_mut()
        } else {
            None
        }
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Appends `item` to the back, growing by one slot if every slot is occupied.
    #[inline(always)]
    pub fn push_back(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.len < self.capacity() {
            self.slots[self.len] = Some(item);
            self.len += 1;
            Ok(())
        } else {
            self.grow_and_push_back(item)
        }
    }

    /// Cold path: grows by one slot then stores at the back.
    #[inline(never)]
    fn grow_and_push_back(&mut self, item: T) -> Result<(), PushError<T>> {
        if let Err(err) = self.grow_one() {
            return Err(PushError::new(err, item));
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Prepends `item`, shifting every element one slot towards the back.
    pub fn push_front(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.len == self.capacity() {
            if let Err(err) = self.grow_one() {
                return Err(PushError::new(err, item));
            }
        }
        // Slot `len` is empty; rotating it to the front moves `[0, len)` up by one.
        self.slots[..=self.len].rotate_right(1);
        self.slots[0] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Appends a clone of `item` to the back.
    pub fn push_back_copy(&mut self, item: &T) -> Result<()>
    where
        T: Clone,
    {
        self.push_back(item.clone())?;
        Ok(())
    }

    /// Prepends a clone of `item`.
    pub fn push_front_copy(&mut self, item: &T) -> Result<()>
    where
        T: Clone,
    {
        self.push_front(item.clone())?;
        Ok(())
    }

    /// Pushes every item to the back in order, stopping at the first failure.
    ///
    /// Items pushed before the failure stay in the sequence; the failing item and
    /// the rest of `iter` are dropped.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<()> {
        for item in iter {
            self.push_back(item)?;
        }
        Ok(())
    }

    fn grow_one(&mut self) -> Result<()> {
        self.ensure_allocated()?;
        self.resize(self.capacity() + 1)
    }

    /// Removes and returns the front element, or `None` if empty.
    ///
    /// Remaining elements shift one slot towards the front; capacity is kept.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[0].take();
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        item
    }

    /// Removes and returns the back element, or `None` if empty. Capacity is kept.
    #[inline(always)]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            self.slots[self.len].take()
        }
    }

    /// Changes the number of slots to exactly `capacity`.
    ///
    /// Growing appends empty slots. Shrinking below `len` drops the elements in
    /// `[capacity, len)`; the front-most `capacity` elements are kept in order.
    ///
    /// # Errors
    /// [`SequenceError::NullReceiver`] on a released sequence,
    /// [`SequenceError::ZeroCapacity`] if `capacity == 0`,
    /// [`SequenceError::AllocFailed`] if growing fails, in which case nothing changes.
    pub fn resize(&mut self, capacity: usize) -> Result<()> {
        self.ensure_allocated()?;
        if capacity == 0 {
            return Err(SequenceError::ZeroCapacity);
        }
        let current = self.capacity();
        match capacity.cmp(&current) {
            Ordering::Equal => {}
            Ordering::Greater => {
                if let Err(err) = self.slots.try_reserve_exact(capacity - current) {
                    warn!("failed to grow sequence from {current} to {capacity} slots: {err}");
                    return Err(err.into());
                }
                self.slots.resize_with(capacity, || None);
                trace!("sequence grew from {current} to {capacity} slots");
            }
            Ordering::Less => {
                if capacity < self.len {
                    debug!(
                        "shrinking sequence to {capacity} slots releases {} elements",
                        self.len - capacity
                    );
                    self.len = capacity;
                }
                self.slots.truncate(capacity);
                self.slots.shrink_to_fit();
                trace!("sequence shrank from {current} to {capacity} slots");
            }
        }
        Ok(())
    }

    /// Drops every element. Capacity is unchanged.
    pub fn empty(&mut self) -> Result<()> {
        self.ensure_allocated()?;
        self.drop_elements();
        Ok(())
    }

    fn drop_elements(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        for slot in &mut self.slots[..len] {
            *slot = None;
        }
    }

    /// Drops every element and the backing store, leaving a released header.
    pub fn release(&mut self) -> Result<()> {
        self.ensure_allocated()?;
        self.len = 0;
        let slots = mem::take(&mut self.slots);
        trace!("releasing sequence with {} slots", slots.len());
        drop(slots);
        Ok(())
    }
}

// ─── Iterators ────────────────────────────────────────────────────────────────

/// Front-to-back iterator over shared references, see [`Sequence::iter`].
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning front-to-back iterator, see [`Sequence::into_iter`].
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<T> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        self.slots.truncate(self.len);
        IntoIter {
            inner: self.slots.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ─── Trait impls ──────────────────────────────────────────────────────────────

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}
