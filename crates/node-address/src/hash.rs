//! Hash-table support keyed by [`Address`].
//!
//! Addresses are already well-distributed integers, so hashing them through
//! SipHash buys nothing. [`AddressHasher`] takes the address's
//! [`hash_code`](Address::hash_code) projection directly and spreads it with
//! a single multiply.
//!
//! # Example
//!
//! ```
//! use node_address::{Address, AddressMap};
//!
//! let mut peers: AddressMap<&str> = AddressMap::default();
//! peers.insert(Address::new(0x0123456789), "relay");
//! assert_eq!(peers.get(&Address::new(0x0123456789)), Some(&"relay"));
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

use crate::Address;

/// Golden-ratio multiplier (2^64 / phi) used to spread the projection.
const SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// Identity-style hasher for [`Address`] keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressHasher(u64);

impl Hasher for AddressHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(b);
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }

    fn write_usize(&mut self, n: usize) {
        self.0 = n as u64;
    }

    fn finish(&self) -> u64 {
        self.0.wrapping_mul(SPREAD)
    }
}

/// Builder for [`AddressHasher`].
pub type BuildAddressHasher = BuildHasherDefault<AddressHasher>;

/// `HashMap` keyed by address.
pub type AddressMap<V> = HashMap<Address, V, BuildAddressHasher>;

/// `HashSet` of addresses.
pub type AddressSet = HashSet<Address, BuildAddressHasher>;
