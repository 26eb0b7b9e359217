//! The node address value type.
//!
//! An [`Address`] identifies a participant in the network compactly: five
//! bytes on the wire instead of a full public key. This module covers its
//! integer, byte, and text encodings along with ordering and hashing.
//!
//! # Example
//!
//! ```
//! use node_address::Address;
//!
//! let addr: Address = "0123456789".parse().unwrap();
//! assert_eq!(addr.to_u64(), 0x0123456789);
//!
//! let wire = addr.to_bytes();
//! assert_eq!(Address::decode(&wire).unwrap(), addr);
//!
//! // Raw integers are masked to 40 bits before comparison.
//! assert!(addr == 0xff_0123456789_u64);
//! ```

mod text;
mod value;

pub use value::Address;
