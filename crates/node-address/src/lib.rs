//! 40-bit network node addresses.
//!
//! A node address identifies a participant in a peer-to-peer virtual network
//! using five bytes instead of a full public key. This crate provides the
//! [`Address`] value type and its canonical encodings:
//!
//! | Form | Layout | Example |
//! |------|--------|---------|
//! | Integer | `u64`, upper 24 bits zero | `0x0123456789` |
//! | Wire | 5 bytes, big-endian | `01 23 45 67 89` |
//! | Text | 10 lowercase hex digits | `"0123456789"` |
//!
//! Deriving an address from a key, and checking that an address really
//! belongs to the key presenting it, happen elsewhere. This crate only
//! enforces the structural rules: the 40-bit width and the reserved ranges.
//!
//! # Example
//!
//! ```
//! use node_address::{Address, Buffer};
//!
//! let addr = Address::new(0x89e92ceee5);
//! assert_eq!(addr.to_string(), "89e92ceee5");
//! assert!(!addr.is_reserved());
//!
//! let mut packet = Buffer::<32>::new();
//! addr.append_to(&mut packet).unwrap();
//! assert_eq!(Address::decode(packet.as_slice()).unwrap(), addr);
//! ```
//!
//! # Features
//!
//! - `std` (default): the [`AddressMap`]/[`AddressSet`] hash-table aliases.
//!   Without it the crate is `no_std` and needs only `alloc`.
//! - `serde`: `Serialize`/`Deserialize` for [`Address`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Node address value type
pub mod address;

// Wire and text layout constants
pub mod constants;

// Byte-level and parse errors
mod error;

// Append-only sinks
pub mod sink;

// Hash-table aliases keyed by address
#[cfg(feature = "std")]
pub mod hash;

#[cfg(feature = "serde")]
mod serde_impl;

pub use address::Address;
pub use constants::{ADDRESS_HEX_LENGTH, ADDRESS_LENGTH, ADDRESS_MASK, RESERVED_PREFIX};
pub use error::{AddressError, ParseAddressError};
#[cfg(feature = "std")]
pub use hash::{AddressHasher, AddressMap, AddressSet, BuildAddressHasher};
pub use sink::{Buffer, BufferOverflow, Sink};
