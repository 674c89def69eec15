//! # Wire Data Model
//!
//! In-memory representations of the values carried by protocol messages.
//!
//! All types here are transient: they are constructed when decoding an
//! inbound buffer or when assembling an outbound payload, and carry no
//! state beyond a single encode/decode call.

use crate::error::{CodecError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Fixed width, in bytes, of every modifier identifier on the wire.
pub const MODIFIER_ID_SIZE: usize = 32;

/// Single-byte tag identifying the semantic kind of a modifier
/// (e.g. block, transaction). Opaque to this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierTypeId(pub u8);

/// Fixed-length binary identifier for a protocol object.
///
/// The width is enforced at construction, so an identifier held in memory
/// can never be serialized at the wrong size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierId([u8; MODIFIER_ID_SIZE]);

impl ModifierId {
    /// Wrap a correctly-sized byte array.
    pub const fn new(bytes: [u8; MODIFIER_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Construct from a slice, failing unless it is exactly
    /// [`MODIFIER_ID_SIZE`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; MODIFIER_ID_SIZE] =
            bytes.try_into().map_err(|_| CodecError::LengthMismatch {
                expected: MODIFIER_ID_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; MODIFIER_ID_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for ModifierId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; MODIFIER_ID_SIZE]> for ModifierId {
    fn from(bytes: [u8; MODIFIER_ID_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModifierId({self})")
    }
}

/// An inventory announcement: identifiers available for a given modifier
/// type, not the data itself.
///
/// Invariant (enforced by [`crate::codec::inv::InvCodec`]): `ids` is
/// non-empty and no longer than the configured `max_inv_objects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvData {
    pub type_id: ModifierTypeId,
    pub ids: Vec<ModifierId>,
}

/// Modifier payloads keyed by identifier.
///
/// Keys are unique; iteration follows insertion order, which is what the
/// encode-side byte budget walks when deciding which entries fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiersData {
    pub type_id: ModifierTypeId,
    pub modifiers: IndexMap<ModifierId, Vec<u8>>,
}

/// An IPv4 peer endpoint as carried in a peer-list message.
///
/// The port occupies a full 4-byte field on the wire, so it is kept as a
/// `u32` rather than the usual `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerAddress {
    pub ip: Ipv4Addr,
    pub port: u32,
}

impl PeerAddress {
    pub const fn new(ip: Ipv4Addr, port: u32) -> Self {
        Self { ip, port }
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
