#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Rejection and boundary-condition tests.
//! Exercises malformed buffers, hostile length fields, and limit edges.

use chainwire::codec::MessageCodec;
use chainwire::config::CodecConfig;
use chainwire::error::CodecError;
use chainwire::registry::MessageRegistry;
use chainwire::types::{InvData, ModifierId, ModifierTypeId, MODIFIER_ID_SIZE};
use chainwire::{InvCodec, ModifiersCodec, PeersCodec, SyncInfoCodec};

fn id(fill: u8) -> ModifierId {
    ModifierId::new([fill; MODIFIER_ID_SIZE])
}

// ============================================================================
// INV
// ============================================================================

#[test]
fn inv_decode_zero_count_is_empty_list() {
    let codec = InvCodec::new(10);
    let bytes = [0x05, 0x00, 0x00, 0x00, 0x00];
    assert_eq!(codec.decode(&bytes), Err(CodecError::EmptyList));
}

#[test]
fn inv_decode_count_over_limit() {
    let codec = InvCodec::new(2);
    let mut bytes = vec![0x05, 0x00, 0x00, 0x00, 0x03];
    bytes.extend_from_slice(&[0u8; 3 * MODIFIER_ID_SIZE]);
    assert_eq!(
        codec.decode(&bytes),
        Err(CodecError::LimitExceeded { count: 3, max: 2 })
    );
}

#[test]
fn inv_decode_empty_buffer() {
    let codec = InvCodec::new(10);
    assert!(matches!(codec.decode(&[]), Err(CodecError::Truncated { .. })));
}

#[test]
fn inv_decode_header_only() {
    let codec = InvCodec::new(10);
    // type byte but no count field
    assert!(matches!(
        codec.decode(&[0x05]),
        Err(CodecError::Truncated { .. })
    ));
}

#[test]
fn inv_decode_partial_identifier() {
    let codec = InvCodec::new(10);
    let mut bytes = vec![0x05, 0x00, 0x00, 0x00, 0x01];
    bytes.extend_from_slice(&[0u8; MODIFIER_ID_SIZE - 1]);
    assert_eq!(
        codec.decode(&bytes),
        Err(CodecError::Truncated {
            needed: 1,
            remaining: MODIFIER_ID_SIZE - 1
        })
    );
}

#[test]
fn inv_encode_at_exact_limit_succeeds() {
    let codec = InvCodec::new(3);
    let data = InvData {
        type_id: ModifierTypeId(1),
        ids: vec![id(1), id(2), id(3)],
    };
    assert!(codec.encode(&data).is_ok());
}

// ============================================================================
// MODIFIERS
// ============================================================================

#[test]
fn modifiers_decode_hostile_count_rejected_cheaply() {
    let codec = ModifiersCodec::new(1 << 20);
    // declares four billion entries in a 5-byte message
    let bytes = [0x01, 0xff, 0xff, 0xff, 0xff];
    assert!(matches!(
        codec.decode(&bytes),
        Err(CodecError::Truncated { .. })
    ));
}

#[test]
fn modifiers_decode_hostile_payload_length() {
    let codec = ModifiersCodec::new(1 << 20);
    let mut bytes = vec![0x01, 0x00, 0x00, 0x00, 0x01];
    bytes.extend_from_slice(id(1).as_bytes());
    bytes.extend_from_slice(&u32::MAX.to_be_bytes());
    assert!(matches!(
        codec.decode(&bytes),
        Err(CodecError::Truncated { .. })
    ));
}

#[test]
fn modifiers_decode_missing_length_field() {
    let codec = ModifiersCodec::new(1 << 20);
    let mut bytes = vec![0x01, 0x00, 0x00, 0x00, 0x01];
    bytes.extend_from_slice(id(1).as_bytes());
    // entry declared but length field absent
    assert!(matches!(
        codec.decode(&bytes),
        Err(CodecError::Truncated { .. })
    ));
}

#[test]
fn modifiers_encode_budget_smaller_than_any_entry() {
    // budget admits the header only; every entry is dropped
    let codec = ModifiersCodec::new(5);
    let data = chainwire::ModifiersData {
        type_id: ModifierTypeId(1),
        modifiers: [(id(1), b"x".to_vec())].into_iter().collect(),
    };
    let bytes = codec.encode(&data).unwrap();
    assert_eq!(bytes.len(), 5);
    let declared = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
    assert_eq!(declared, 0);
}

// ============================================================================
// PEERS
// ============================================================================

#[test]
fn peers_decode_length_mismatch() {
    let codec = PeersCodec::new();
    // count says 1, body holds 7 of the 8 required bytes
    let mut bytes = vec![0, 0, 0, 1];
    bytes.extend_from_slice(&[0u8; 7]);
    assert_eq!(
        codec.decode(&bytes),
        Err(CodecError::LengthMismatch {
            expected: 12,
            actual: 11
        })
    );
}

#[test]
fn peers_decode_excess_bytes_rejected() {
    let codec = PeersCodec::new();
    let mut bytes = vec![0, 0, 0, 0];
    bytes.push(0xaa);
    assert!(matches!(
        codec.decode(&bytes),
        Err(CodecError::LengthMismatch { .. })
    ));
}

#[test]
fn peers_decode_hostile_count() {
    let codec = PeersCodec::new();
    let bytes = [0xff, 0xff, 0xff, 0xff];
    assert!(matches!(
        codec.decode(&bytes),
        Err(CodecError::LengthMismatch { .. })
    ));
}

// ============================================================================
// REGISTRY
// ============================================================================

fn registry() -> MessageRegistry<Vec<u8>> {
    let sync = SyncInfoCodec::new(|bytes: &[u8]| Ok(bytes.to_vec()), |v: &Vec<u8>| v.clone());
    MessageRegistry::new(&CodecConfig::new(4, 1024), sync)
}

#[test]
fn registry_unknown_code() {
    let reg = registry();
    for code in [0u8, 3, 66, 255] {
        assert_eq!(
            reg.decode(code, &[]),
            Err(CodecError::UnknownMessageCode(code))
        );
    }
}

#[test]
fn registry_decode_error_passes_through() {
    let reg = registry();
    // Inv with zero count under the real Inv code
    let err = reg.decode(55, &[0x01, 0, 0, 0, 0]).unwrap_err();
    assert_eq!(err, CodecError::EmptyList);
}
