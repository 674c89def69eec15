//! # chainwire
//!
//! Binary wire-message codecs for peer-to-peer blockchain node communication.
//!
//! This crate is the codec layer of a node's networking stack: it converts
//! strongly-typed in-memory values to and from fixed-layout byte sequences,
//! enforcing size and structural limits so malformed or hostile input is
//! rejected before it reaches higher layers. Socket I/O, handshakes, peer
//! management, and consensus logic live elsewhere; an external dispatcher
//! selects a codec by wire code and calls [`codec::MessageCodec::decode`] or
//! [`codec::MessageCodec::encode`].
//!
//! ## Message kinds
//! | Message         | Code | Layout                                          |
//! |-----------------|------|-------------------------------------------------|
//! | Sync            | 65   | opaque bytes (injected parser/serializer)       |
//! | RequestModifier | 22   | `type(1) count(4) id(32)*count`                 |
//! | Modifier        | 33   | `type(1) count(4) [id(32) len(4) payload(len)]*`|
//! | Inv             | 55   | `type(1) count(4) id(32)*count`                 |
//! | GetPeers        | 1    | empty                                           |
//! | Peers           | 2    | `count(4) [addr(4) port(4)]*count`              |
//!
//! All multi-byte integers are big-endian.
//!
//! ## Safety properties
//! - Declared counts are validated against the actual buffer length before
//!   any allocation
//! - Every decode failure is a typed [`error::CodecError`]
//! - Codecs hold no mutable state and are freely shared across threads
//!
//! ## Example
//! ```rust
//! use chainwire::codec::sync_info::SyncInfoCodec;
//! use chainwire::config::CodecConfig;
//! use chainwire::registry::{Message, MessageRegistry};
//! use chainwire::types::{InvData, ModifierId, ModifierTypeId, MODIFIER_ID_SIZE};
//!
//! // Sync-info payloads are consensus-defined; carry them verbatim here.
//! let sync = SyncInfoCodec::new(
//!     |bytes: &[u8]| Ok(bytes.to_vec()),
//!     |value: &Vec<u8>| value.clone(),
//! );
//! let registry = MessageRegistry::new(&CodecConfig::new(400, 1 << 20), sync);
//!
//! let inv = InvData {
//!     type_id: ModifierTypeId(2),
//!     ids: vec![ModifierId::new([0u8; MODIFIER_ID_SIZE])],
//! };
//! let (code, payload) = registry.encode(&Message::Inv(inv)).unwrap();
//! assert_eq!(code, 55);
//! assert!(matches!(registry.decode(code, &payload), Ok(Message::Inv(_))));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use codec::inv::{InvCodec, RequestModifierCodec};
pub use codec::modifiers::ModifiersCodec;
pub use codec::peers::{GetPeersCodec, PeersCodec};
pub use codec::sync_info::SyncInfoCodec;
pub use codec::MessageCodec;
pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use registry::{Message, MessageRegistry};
pub use types::{
    InvData, ModifierId, ModifierTypeId, ModifiersData, PeerAddress, MODIFIER_ID_SIZE,
};
