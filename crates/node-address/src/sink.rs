//! Append-only byte sinks that addresses serialize into.
//!
//! Protocol messages are assembled by appending fixed-size fields to the end
//! of a buffer. [`Sink`] captures the one capability an address needs from
//! such a buffer: reserve `len` bytes at the end and hand them back for
//! writing.
//!
//! # Example
//!
//! ```
//! use node_address::{Address, Buffer};
//!
//! let mut packet = Buffer::<16>::new();
//! packet.append(&[0x01]).unwrap();
//! Address::new(0x0102030405).append_to(&mut packet).unwrap();
//! assert_eq!(packet.as_slice(), &[0x01, 0x01, 0x02, 0x03, 0x04, 0x05]);
//! ```

use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

use thiserror::Error;

/// A growable byte output that appends fields at its end.
pub trait Sink {
    /// Error raised when the sink cannot grow by the requested amount.
    type Error;

    /// Extends the sink by `len` bytes and returns the new region.
    ///
    /// The returned slice is exactly `len` bytes long. Its initial contents
    /// are unspecified; callers overwrite all of it.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the sink cannot hold `len` more bytes. The
    /// sink's contents are unchanged in that case.
    fn append_field(&mut self, len: usize) -> Result<&mut [u8], Self::Error>;
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    fn append_field(&mut self, len: usize) -> Result<&mut [u8], Self::Error> {
        let start = self.len();
        self.resize(start + len, 0);
        Ok(&mut self[start..])
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn append_field(&mut self, len: usize) -> Result<&mut [u8], Self::Error> {
        (**self).append_field(len)
    }
}

/// A [`Buffer`] append did not fit in the remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer overflow: {requested} bytes requested, {available} available")]
pub struct BufferOverflow {
    /// Bytes the caller tried to append.
    pub requested: usize,
    /// Bytes left before the buffer is full.
    pub available: usize,
}

/// Fixed-capacity packet buffer of `C` bytes.
///
/// Lives entirely inline; appends past the capacity fail with
/// [`BufferOverflow`] rather than reallocating.
#[derive(Clone)]
pub struct Buffer<const C: usize> {
    len: usize,
    data: [u8; C],
}

impl<const C: usize> Buffer<C> {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [0; C],
        }
    }

    /// Number of bytes appended so far.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been appended.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        C
    }

    /// The appended bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Discards all appended bytes.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends a byte string.
    ///
    /// # Errors
    ///
    /// Returns [`BufferOverflow`] if `bytes` does not fit; the buffer is
    /// unchanged.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), BufferOverflow> {
        self.append_field(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }
}

impl<const C: usize> Default for Buffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> Sink for Buffer<C> {
    type Error = BufferOverflow;

    fn append_field(&mut self, len: usize) -> Result<&mut [u8], Self::Error> {
        let available = C - self.len;
        if len > available {
            return Err(BufferOverflow {
                requested: len,
                available,
            });
        }
        let start = self.len;
        self.len += len;
        Ok(&mut self.data[start..self.len])
    }
}

impl<const C: usize> AsRef<[u8]> for Buffer<C> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const C: usize> fmt::Debug for Buffer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &C)
            .field("data", &self.as_slice())
            .finish()
    }
}
