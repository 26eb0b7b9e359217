//! Wire and text layout constants for node addresses.
//!
//! Every other size in the crate is derived from [`ADDRESS_LENGTH`]: an
//! address is five octets on the wire and two hex digits per octet in text.

/// Length of an address on the wire, in bytes.
pub const ADDRESS_LENGTH: usize = 5;

/// Width of an address value in bits (`ADDRESS_LENGTH * 8`).
pub const ADDRESS_BITS: u32 = (ADDRESS_LENGTH as u32) * 8; // 40

/// Mask selecting the meaningful low 40 bits of a `u64`.
///
/// Every constructor and every comparison against a raw integer passes the
/// integer through this mask first.
pub const ADDRESS_MASK: u64 = (1 << ADDRESS_BITS) - 1; // 0xff_ffff_ffff

/// Number of hex digits in the canonical text form.
pub const ADDRESS_HEX_LENGTH: usize = ADDRESS_LENGTH * 2; // 10

/// Top byte that marks an address as reserved.
///
/// Addresses beginning with `0xff` are set aside for future extensions
/// (longer addresses, addresses derived from IPv6 internals, and so on).
pub const RESERVED_PREFIX: u8 = 0xff;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_mask_width() {
        assert_eq!(ADDRESS_BITS, 40);
        assert_eq!(ADDRESS_MASK, 0xff_ffff_ffff);
        assert_eq!(ADDRESS_MASK.count_ones(), ADDRESS_BITS);
    }

    #[test]
    fn test_hex_length() {
        assert_eq!(ADDRESS_HEX_LENGTH, 10);
        assert_eq!(format!("{:x}", ADDRESS_MASK).len(), ADDRESS_HEX_LENGTH);
    }
}
