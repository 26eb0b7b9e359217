//! The 40-bit address value and its byte-level codec.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::constants::{ADDRESS_LENGTH, ADDRESS_MASK, RESERVED_PREFIX};
use crate::error::AddressError;
use crate::sink::Sink;

/// A 40-bit network node address.
///
/// Stored as a `u64` whose upper 24 bits are always zero. All constructors
/// mask their input to the low 40 bits, so the invariant
/// `addr.to_u64() == addr.to_u64() & ADDRESS_MASK` holds for every value.
///
/// On the wire an address is exactly five bytes, most significant first. In
/// text it is exactly ten lowercase hex digits.
///
/// # Reserved values
///
/// The null address and any address whose top byte is
/// [`RESERVED_PREFIX`] are reserved and must not be used as peer
/// identities. The type still holds and encodes them; check
/// [`is_reserved`](Self::is_reserved) before trusting one.
///
/// # Example
///
/// ```
/// use node_address::Address;
///
/// let addr = Address::new(0x0123456789);
/// assert_eq!(addr.to_bytes(), [0x01, 0x23, 0x45, 0x67, 0x89]);
/// assert_eq!(addr.to_string(), "0123456789");
/// assert!(!addr.is_reserved());
///
/// // Bits above 40 are discarded.
/// assert_eq!(Address::new(0xabcd_0123456789), addr);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Address(u64);

impl Address {
    /// The null address (value 0).
    pub const NULL: Self = Self(0);

    /// The largest address value, `0xffffffffff`. Reserved.
    pub const MAX: Self = Self(ADDRESS_MASK);

    /// Creates an address from a raw integer, keeping only the low 40 bits.
    ///
    /// Never fails: the upper 24 bits are silently discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::Address;
    ///
    /// assert_eq!(Address::new(0x10000000001).to_u64(), 0x0000000001);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value & ADDRESS_MASK)
    }

    /// Decodes an address from the first five bytes of `bytes`, big-endian.
    ///
    /// Bytes past the fifth are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::TooShort`] if `bytes` holds fewer than five
    /// bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::{Address, AddressError};
    ///
    /// let addr = Address::decode(&[0x01, 0x02, 0x03, 0x04, 0x05, 0xee]).unwrap();
    /// assert_eq!(addr.to_u64(), 0x0102030405);
    ///
    /// assert_eq!(Address::decode(&[1, 2]), Err(AddressError::TooShort { len: 2 }));
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self, AddressError> {
        match bytes.first_chunk::<ADDRESS_LENGTH>() {
            Some(raw) => Ok(Self::from_array(*raw)),
            None => Err(AddressError::TooShort { len: bytes.len() }),
        }
    }

    /// Decodes like [`decode`](Self::decode), but yields the null address for
    /// input shorter than five bytes.
    ///
    /// This is the fail-soft behavior peers have always relied on when reading
    /// truncated fields.
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::Address;
    ///
    /// assert_eq!(Address::from_bytes_or_null(&[0xff; 4]), Address::NULL);
    /// ```
    #[must_use]
    pub fn from_bytes_or_null(bytes: &[u8]) -> Self {
        Self::decode(bytes).unwrap_or(Self::NULL)
    }

    /// Replaces this address with one decoded from `bytes`, fail-soft.
    ///
    /// Input shorter than five bytes resets the address to null.
    pub fn set_to(&mut self, bytes: &[u8]) {
        *self = Self::from_bytes_or_null(bytes);
    }

    /// Builds an address from its exact five-byte wire form.
    #[inline]
    #[must_use]
    pub const fn from_array(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(
            (bytes[0] as u64) << 32
                | (bytes[1] as u64) << 24
                | (bytes[2] as u64) << 16
                | (bytes[3] as u64) << 8
                | bytes[4] as u64,
        )
    }

    /// Returns the five-byte wire form, most significant byte first.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; ADDRESS_LENGTH] {
        let be = self.0.to_be_bytes();
        [be[3], be[4], be[5], be[6], be[7]]
    }

    /// Writes the five-byte wire form into the start of `buf`.
    ///
    /// Bytes of `buf` past the fifth are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::BufferTooSmall`] if `buf` is shorter than five
    /// bytes. Nothing is written in that case, so callers that only need the
    /// legacy no-op behavior may discard the error.
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::Address;
    ///
    /// let mut buf = [0u8; 6];
    /// Address::new(0x0a0b0c0d0e).copy_to(&mut buf).unwrap();
    /// assert_eq!(buf, [0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x00]);
    ///
    /// let mut short = [0u8; 3];
    /// assert!(Address::new(1).copy_to(&mut short).is_err());
    /// assert_eq!(short, [0, 0, 0]);
    /// ```
    pub fn copy_to(self, buf: &mut [u8]) -> Result<(), AddressError> {
        match buf.first_chunk_mut::<ADDRESS_LENGTH>() {
            Some(out) => {
                *out = self.to_bytes();
                Ok(())
            }
            None => Err(AddressError::BufferTooSmall { len: buf.len() }),
        }
    }

    /// Appends the five-byte wire form to the end of `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error if it cannot grow by five bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::Address;
    ///
    /// let mut out = vec![0xaa];
    /// Address::new(0x0102030405).append_to(&mut out).unwrap();
    /// assert_eq!(out, [0xaa, 0x01, 0x02, 0x03, 0x04, 0x05]);
    /// ```
    pub fn append_to<S: Sink + ?Sized>(self, sink: &mut S) -> Result<(), S::Error> {
        sink.append_field(ADDRESS_LENGTH)?.copy_from_slice(&self.to_bytes());
        Ok(())
    }

    /// Returns the address as an integer in `0..2^40`.
    #[inline]
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// Identity-style hash projection for hash tables.
    ///
    /// A pure function of the value: equal addresses project equally. On
    /// 32-bit targets only the low 32 bits survive.
    #[inline]
    #[must_use]
    pub const fn hash_code(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is the null address.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this address is not null.
    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    /// Resets this address to null.
    #[inline]
    pub fn zero(&mut self) {
        self.0 = 0;
    }

    /// Returns true if the address is null or begins with [`RESERVED_PREFIX`].
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::Address;
    ///
    /// assert!(Address::NULL.is_reserved());
    /// assert!(Address::new(0xff00000001).is_reserved());
    /// assert!(!Address::new(0x0123456789).is_reserved());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 == 0 || (self.0 >> 32) as u8 == RESERVED_PREFIX
    }

    /// Returns byte `index` of the wire form; index 0 is most significant.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::IndexOutOfRange`] for `index > 4`.
    ///
    /// # Example
    ///
    /// ```
    /// use node_address::Address;
    ///
    /// let addr = Address::new(0x0102030405);
    /// assert_eq!(addr.byte(0), Ok(0x01));
    /// assert_eq!(addr.byte(4), Ok(0x05));
    /// assert!(addr.byte(5).is_err());
    /// ```
    pub fn byte(self, index: usize) -> Result<u8, AddressError> {
        self.to_bytes()
            .get(index)
            .copied()
            .ok_or(AddressError::IndexOutOfRange { index })
    }
}

// Hash through the projection so `AddressHasher` sees the raw value.
impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.hash_code());
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self::from_array(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LENGTH] {
    fn from(addr: Address) -> Self {
        addr.to_bytes()
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(bytes)
    }
}

impl PartialEq<u64> for Address {
    fn eq(&self, other: &u64) -> bool {
        self.0 == other & ADDRESS_MASK
    }
}

impl PartialEq<Address> for u64 {
    fn eq(&self, other: &Address) -> bool {
        other == self
    }
}

impl PartialOrd<u64> for Address {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(self.0.cmp(&(other & ADDRESS_MASK)))
    }
}

impl PartialOrd<Address> for u64 {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some((self & ADDRESS_MASK).cmp(&other.0))
    }
}
