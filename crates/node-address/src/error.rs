//! Error types for address decoding, encoding, and parsing.

use thiserror::Error;

#[cfg(doc)]
use crate::constants::{ADDRESS_HEX_LENGTH, ADDRESS_LENGTH};

/// Error from a byte-level address operation.
///
/// None of these are fatal: a failed operation leaves every input and output
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input held fewer than [`ADDRESS_LENGTH`] bytes.
    #[error("address needs 5 bytes, got {len}")]
    TooShort {
        /// Length of the rejected input.
        len: usize,
    },
    /// Output buffer held fewer than [`ADDRESS_LENGTH`] bytes; nothing was written.
    #[error("output buffer needs 5 bytes, has {len}")]
    BufferTooSmall {
        /// Length of the rejected buffer.
        len: usize,
    },
    /// Byte index outside `0..ADDRESS_LENGTH`.
    #[error("byte index {index} out of range 0..5")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

/// Error when parsing an address from its hex text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseAddressError {
    /// The string was empty.
    #[error("empty address string")]
    Empty,
    /// More than [`ADDRESS_HEX_LENGTH`] digits.
    #[error("address has {len} hex digits, at most 10 allowed")]
    TooLong {
        /// Number of characters in the rejected string.
        len: usize,
    },
    /// Character is not a hex digit.
    #[error("invalid character '{character}' at position {position}")]
    InvalidDigit {
        /// The invalid character.
        character: char,
        /// Character position in the string.
        position: usize,
    },
}
