//! Hex text form of an address.
//!
//! The canonical form is exactly ten lowercase hex digits with no prefix,
//! zero-padded on the left. Parsing is a little more forgiving: it accepts
//! one to ten digits in either case.

use core::fmt;
use core::str::FromStr;

use super::Address;
use crate::constants::ADDRESS_HEX_LENGTH;
use crate::error::ParseAddressError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Address {
    /// Returns the canonical ten-digit text form as ASCII bytes.
    #[must_use]
    pub fn to_hex_array(self) -> [u8; ADDRESS_HEX_LENGTH] {
        let mut out = [b'0'; ADDRESS_HEX_LENGTH];
        let mut v = self.to_u64();
        for slot in out.iter_mut().rev() {
            *slot = HEX_DIGITS[(v & 0xf) as usize];
            v >>= 4;
        }
        out
    }

    /// Writes the text form into `buf` followed by a NUL terminator.
    ///
    /// Behaves like a bounded `snprintf`: at most `buf.len() - 1` digits are
    /// written, so a short buffer receives a truncated prefix and is never
    /// overrun. An empty buffer is left untouched.
    ///
    /// Returns the number of digits written, excluding the terminator. A
    /// result below ten means the output was truncated.
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::Address;
    ///
    /// let addr = Address::new(0x89abcdef01);
    ///
    /// let mut buf = [0xffu8; 16];
    /// assert_eq!(addr.write_c_str(&mut buf), 10);
    /// assert_eq!(&buf[..11], b"89abcdef01\0");
    ///
    /// let mut small = [0xffu8; 4];
    /// assert_eq!(addr.write_c_str(&mut small), 3);
    /// assert_eq!(&small, b"89a\0");
    /// ```
    pub fn write_c_str(self, buf: &mut [u8]) -> usize {
        let Some(room) = buf.len().checked_sub(1) else {
            return 0;
        };
        let n = room.min(ADDRESS_HEX_LENGTH);
        buf[..n].copy_from_slice(&self.to_hex_array()[..n]);
        buf[n] = 0;
        n
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010x}", self.to_u64())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:010x})", self.to_u64())
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010x}", self.to_u64())
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010X}", self.to_u64())
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    /// Parses one to ten hex digits, either case, no prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAddressError::Empty);
        }
        let len = s.chars().count();
        if len > ADDRESS_HEX_LENGTH {
            return Err(ParseAddressError::TooLong { len });
        }
        let mut value = 0u64;
        for (position, character) in s.chars().enumerate() {
            let digit = character
                .to_digit(16)
                .ok_or(ParseAddressError::InvalidDigit {
                    character,
                    position,
                })?;
            value = (value << 4) | u64::from(digit);
        }
        Ok(Self::new(value))
    }
}

impl TryFrom<&str> for Address {
    type Error = ParseAddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
