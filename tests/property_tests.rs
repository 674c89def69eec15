//! Property-based tests using proptest
//!
//! These tests validate codec invariants across a wide range of randomly
//! generated inputs: round-trips, limit enforcement, and the encode-side
//! truncation policy.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chainwire::codec::MessageCodec;
use chainwire::types::{
    InvData, ModifierId, ModifierTypeId, ModifiersData, PeerAddress, MODIFIER_ID_SIZE,
};
use chainwire::{InvCodec, ModifiersCodec, PeersCodec};
use proptest::prelude::*;
use std::net::Ipv4Addr;

const MAX_INV_OBJECTS: u32 = 64;

fn modifier_id() -> impl Strategy<Value = ModifierId> {
    any::<[u8; MODIFIER_ID_SIZE]>().prop_map(ModifierId::new)
}

fn inv_data() -> impl Strategy<Value = InvData> {
    (
        any::<u8>(),
        prop::collection::vec(modifier_id(), 1..=MAX_INV_OBJECTS as usize),
    )
        .prop_map(|(type_id, ids)| InvData {
            type_id: ModifierTypeId(type_id),
            ids,
        })
}

fn peer_address() -> impl Strategy<Value = PeerAddress> {
    (any::<[u8; 4]>(), any::<u32>())
        .prop_map(|(octets, port)| PeerAddress::new(Ipv4Addr::from(octets), port))
}

fn modifiers_data(max_payload: usize) -> impl Strategy<Value = ModifiersData> {
    (
        any::<u8>(),
        prop::collection::vec(
            (modifier_id(), prop::collection::vec(any::<u8>(), 0..max_payload)),
            1..16,
        ),
    )
        .prop_map(|(type_id, entries)| ModifiersData {
            type_id: ModifierTypeId(type_id),
            modifiers: entries.into_iter().collect(),
        })
}

// Property: any valid inventory round-trips exactly
proptest! {
    #[test]
    fn prop_inv_roundtrip(data in inv_data()) {
        let codec = InvCodec::new(MAX_INV_OBJECTS);
        let bytes = codec.encode(&data).expect("valid inventory encodes");
        let decoded = codec.decode(&bytes).expect("own output decodes");
        prop_assert_eq!(decoded, data);
    }
}

// Property: inventory encoding is deterministic and sized exactly
proptest! {
    #[test]
    fn prop_inv_encoded_size(data in inv_data()) {
        let codec = InvCodec::new(MAX_INV_OBJECTS);
        let bytes = codec.encode(&data).expect("valid inventory encodes");
        prop_assert_eq!(bytes.len(), 1 + 4 + data.ids.len() * MODIFIER_ID_SIZE);
        prop_assert_eq!(bytes, codec.encode(&data).expect("second encode"));
    }
}

// Property: a modifiers set within budget round-trips as a map
proptest! {
    #[test]
    fn prop_modifiers_roundtrip(data in modifiers_data(64)) {
        // 15 entries of at most 64 payload bytes each always fit this budget
        let codec = ModifiersCodec::new(1 << 16);
        let bytes = codec.encode(&data).expect("non-empty set encodes");
        let decoded = codec.decode(&bytes).expect("own output decodes");
        prop_assert_eq!(decoded, data);
    }
}

// Property: over-budget encodes stay within the byte budget and declare
// fewer entries than the input holds
proptest! {
    #[test]
    fn prop_modifiers_truncation(data in modifiers_data(512), max in 64usize..512) {
        let codec = ModifiersCodec::new(max);
        let bytes = codec.encode(&data).expect("non-empty set encodes");
        prop_assert!(bytes.len() <= max);

        let declared =
            u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) as usize;
        prop_assert!(declared <= data.modifiers.len());

        let true_total: usize = 5 + data
            .modifiers
            .iter()
            .map(|(_, payload)| MODIFIER_ID_SIZE + 4 + payload.len())
            .sum::<usize>();
        if true_total > max {
            prop_assert!(declared < data.modifiers.len());
        } else {
            prop_assert_eq!(declared, data.modifiers.len());
        }

        // whatever was included still decodes to a subset of the input
        let decoded = codec.decode(&bytes).expect("truncated output decodes");
        for (id, payload) in &decoded.modifiers {
            prop_assert_eq!(data.modifiers.get(id), Some(payload));
        }
    }
}

// Property: any peer list, including empty, round-trips in order
proptest! {
    #[test]
    fn prop_peers_roundtrip(list in prop::collection::vec(peer_address(), 0..64)) {
        let codec = PeersCodec::new();
        let bytes = codec.encode(&list).expect("peer list encodes");
        let decoded = codec.decode(&bytes).expect("own output decodes");
        prop_assert_eq!(decoded, list);
    }
}

// Property: truncating an encoded inventory anywhere mid-body fails with a
// typed error, never a panic
proptest! {
    #[test]
    fn prop_inv_truncated_buffers_rejected(data in inv_data(), cut in 0usize..100) {
        let codec = InvCodec::new(MAX_INV_OBJECTS);
        let bytes = codec.encode(&data).expect("valid inventory encodes");
        let cut = cut.min(bytes.len().saturating_sub(1));
        if cut < bytes.len() {
            prop_assert!(codec.decode(&bytes[..cut]).is_err());
        }
    }
}
