//! A fixed-capacity circular queue.
//!
//! [`RingBuffer`] keeps up to `capacity` elements in FIFO order inside
//! storage allocated once at construction. Pushing into a full buffer and
//! popping from an empty one are rejected with explicit errors
//! ([`PushError::Full`], [`PopError::Empty`]) rather than overwriting data,
//! blocking, or panicking, so the structure can sit inside a larger system
//! as a bounded, O(1) queue primitive.
//!
//! The buffer is single-threaded by design: all mutation goes through
//! `&mut self` and there is no internal locking. Callers that need shared
//! access wrap it in their own synchronization.
//!
//! ```
//! use ringbuffer::{PushError, RingBuffer};
//!
//! let mut buffer = RingBuffer::new(2);
//! buffer.push('a')?;
//! buffer.push('b')?;
//!
//! // Overflow hands the rejected value back instead of dropping 'a'.
//! assert_eq!(buffer.push('c'), Err(PushError::Full('c')));
//!
//! assert_eq!(buffer.pop(), Ok('a'));
//! assert_eq!(buffer.pop(), Ok('b'));
//! assert!(buffer.pop().is_err());
//! # Ok::<(), PushError<char>>(())
//! ```

mod error;

pub use crate::error::PopError;
pub use crate::error::PushError;

/// A bounded FIFO queue backed by fixed, pre-allocated circular storage.
///
/// Two cursors walk the storage: `front` is the slot the next push writes,
/// `back` is the oldest element and the slot the next pop reads. When the
/// cursors coincide the buffer is either empty or completely occupied; the
/// `full` flag resolves which.
///
/// Slots hold `Option<T>` so that no bounds are required on `T`: vacant
/// slots are `None`, and a pop moves the value out with [`Option::take`].
/// Every slot in the occupied region `back..front` (mod capacity) is `Some`.
#[derive(Debug)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    front: usize,
    back: usize,
    full: bool,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer that can hold up to `capacity` elements.
    ///
    /// The backing storage is allocated here and never reallocated.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        RingBuffer {
            slots,
            front: 0,
            back: 0,
            full: false,
        }
    }

    /// Appends `value` at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Full`] carrying `value` back to the caller if
    /// the buffer already holds `capacity` elements. The buffer is left
    /// unchanged; nothing is overwritten.
    pub fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        if self.full {
            return Err(PushError::Full(value));
        }
        self.slots[self.front] = Some(value);
        self.front = self.advance(self.front);
        if self.front == self.back {
            self.full = true;
        }
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`PopError::Empty`] if the buffer holds no elements, leaving
    /// it unchanged.
    pub fn pop(&mut self) -> Result<T, PopError> {
        // Vacant slots are `None`, so an empty buffer reports itself here
        // before any cursor moves.
        let value = self.slots[self.back].take().ok_or(PopError::Empty)?;
        self.back = self.advance(self.back);
        // A successful pop always leaves at least one free slot.
        self.full = false;
        Ok(value)
    }

    /// Removes and returns all elements, oldest first.
    ///
    /// Never fails: an empty buffer yields an empty `Vec`. The buffer is
    /// empty afterwards and remains usable.
    pub fn pop_all(&mut self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop() {
            drained.push(value);
        }
        drained
    }

    /// Returns a reference to the oldest element without removing it.
    ///
    /// Repeated calls return the same element and never change the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PopError::Empty`] if the buffer holds no elements.
    pub fn peek(&self) -> Result<&T, PopError> {
        self.slots[self.back].as_ref().ok_or(PopError::Empty)
    }

    /// Visits the stored elements oldest first without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let back = self.back;
        let capacity = self.capacity();
        (0..self.len()).filter_map(move |offset| self.slots[(back + offset) % capacity].as_ref())
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        if self.full {
            self.capacity()
        } else {
            (self.front + self.capacity() - self.back) % self.capacity()
        }
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.front == self.back && !self.full
    }

    /// Returns `true` if the next push would be rejected.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Returns the fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.capacity()
    }
}
