use std::error::Error;
use std::fmt;

/// Error returned by [`RingBuffer::push`](crate::RingBuffer::push) when the
/// buffer is at capacity.
///
/// The rejected value is carried inside the error so the caller keeps
/// ownership and can retry once a pop has freed a slot.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PushError<T> {
    /// The buffer already holds `capacity` elements.
    Full(T),
}

impl<T> PushError<T> {
    /// Consumes the error, returning the rejected value.
    pub fn into_inner(self) -> T {
        let PushError::Full(value) = self;
        value
    }
}

// Implemented by hand so the error works for any `T`, not just `T: Debug`.
impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(_) => f.write_str("Full(_)"),
        }
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(_) => f.write_str("ring buffer full"),
        }
    }
}

impl<T> Error for PushError<T> {}

/// Error returned by [`RingBuffer::pop`](crate::RingBuffer::pop) and
/// [`RingBuffer::peek`](crate::RingBuffer::peek) when the buffer holds no
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopError {
    /// The buffer holds no elements.
    Empty,
}

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopError::Empty => f.write_str("ring buffer empty"),
        }
    }
}

impl Error for PopError {}
