//! Serde integration tests. Run with `--features serde`.

use node_address::{Address, AddressMap};

#[test]
fn test_json_is_hex_string() {
    let addr = Address::new(0x0123456789);
    let json = serde_json::to_string(&addr).unwrap();
    assert_eq!(json, "\"0123456789\"");
    let back: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(back, addr);
}

#[test]
fn test_json_accepts_short_and_uppercase() {
    let addr: Address = serde_json::from_str("\"ABC\"").unwrap();
    assert_eq!(addr, Address::new(0xabc));
}

#[test]
fn test_json_rejects_malformed() {
    assert!(serde_json::from_str::<Address>("\"01234567890\"").is_err());
    assert!(serde_json::from_str::<Address>("\"zz\"").is_err());
    assert!(serde_json::from_str::<Address>("\"\"").is_err());
    assert!(serde_json::from_str::<Address>("12").is_err());
}

#[test]
fn test_json_map_keys() {
    let mut peers: AddressMap<u32> = AddressMap::default();
    peers.insert(Address::new(0xfeedfacecf), 9993);
    let json = serde_json::to_string(&peers).unwrap();
    assert_eq!(json, "{\"feedfacecf\":9993}");
    let back: AddressMap<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, peers);
}

#[test]
fn test_bincode_is_wire_array() {
    let addr = Address::new(0x0102030405);
    let encoded = bincode::serialize(&addr).unwrap();
    assert_eq!(encoded, vec![1, 2, 3, 4, 5]);
    let back: Address = bincode::deserialize(&encoded).unwrap();
    assert_eq!(back, addr);
}

#[test]
fn test_bincode_reserved_roundtrip() {
    let addr = Address::MAX;
    let encoded = bincode::serialize(&addr).unwrap();
    assert_eq!(encoded, vec![0xff; 5]);
    assert_eq!(bincode::deserialize::<Address>(&encoded).unwrap(), addr);
}

#[test]
fn test_bincode_rejects_four_bytes() {
    assert!(bincode::deserialize::<Address>(&[1, 2, 3, 4]).is_err());
}

#[test]
fn test_bincode_field_is_five_bytes_in_tuple() {
    let pair = (Address::new(0x0a0b0c0d0e), 7u8);
    let encoded = bincode::serialize(&pair).unwrap();
    assert_eq!(encoded, vec![0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 7]);
    assert_eq!(bincode::deserialize::<(Address, u8)>(&encoded).unwrap(), pair);
}
