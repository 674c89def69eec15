//! Inventory and modifier-request codecs.
//!
//! ## Wire Format
//! ```text
//! [Type(1)] [Count(4, BE)] [Id(32)] * Count
//! ```
//!
//! The two messages share one layout and one implementation; they differ
//! only in wire code. Code 55 announces "here is inventory I have", code 22
//! asks "please send me these modifiers", and the dispatcher tells them
//! apart by the code alone.

use bytes::BufMut;

use crate::codec::{ByteReader, MessageCodec};
use crate::error::{CodecError, Result};
use crate::types::{InvData, ModifierId, ModifierTypeId, MODIFIER_ID_SIZE};

/// Codec for inventory announcements.
///
/// Enforces `1 <= count <= max_inv_objects` on both encode and decode.
#[derive(Debug, Clone, Copy)]
pub struct InvCodec {
    max_inv_objects: u32,
}

impl InvCodec {
    /// Wire code for inventory announcements.
    pub const CODE: u8 = super::codes::INV;

    pub const fn new(max_inv_objects: u32) -> Self {
        Self { max_inv_objects }
    }

    fn check_count(&self, count: u32) -> Result<()> {
        if count == 0 {
            return Err(CodecError::EmptyList);
        }
        if count > self.max_inv_objects {
            return Err(CodecError::LimitExceeded {
                count,
                max: self.max_inv_objects,
            });
        }
        Ok(())
    }
}

impl MessageCodec for InvCodec {
    type Message = InvData;

    fn code(&self) -> u8 {
        Self::CODE
    }

    fn name(&self) -> &'static str {
        "Inv"
    }

    fn encode(&self, msg: &InvData) -> Result<Vec<u8>> {
        self.check_count(msg.ids.len() as u32)?;

        let mut buf = Vec::with_capacity(1 + 4 + msg.ids.len() * MODIFIER_ID_SIZE);
        buf.put_u8(msg.type_id.0);
        buf.put_u32(msg.ids.len() as u32);
        for id in &msg.ids {
            buf.put_slice(id.as_bytes());
        }
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<InvData> {
        let mut reader = ByteReader::new(bytes);
        let type_id = ModifierTypeId(reader.read_u8()?);
        let count = reader.read_u32()?;
        self.check_count(count)?;

        // Validate the declared count against the actual buffer before
        // allocating, so a hostile count field cannot force a huge Vec.
        let needed = count as usize * MODIFIER_ID_SIZE;
        if reader.remaining() < needed {
            return Err(CodecError::Truncated {
                needed: needed - reader.remaining(),
                remaining: reader.remaining(),
            });
        }

        let mut ids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            ids.push(ModifierId::from_slice(reader.read_bytes(MODIFIER_ID_SIZE)?)?);
        }
        Ok(InvData { type_id, ids })
    }
}

/// Codec for modifier requests.
///
/// Identical payload shape to [`InvCodec`] and delegates to it wholesale;
/// only the wire code and name differ.
#[derive(Debug, Clone, Copy)]
pub struct RequestModifierCodec {
    inner: InvCodec,
}

impl RequestModifierCodec {
    /// Wire code for modifier requests.
    pub const CODE: u8 = super::codes::REQUEST_MODIFIER;

    pub const fn new(max_inv_objects: u32) -> Self {
        Self {
            inner: InvCodec::new(max_inv_objects),
        }
    }
}

impl MessageCodec for RequestModifierCodec {
    type Message = InvData;

    fn code(&self) -> u8 {
        Self::CODE
    }

    fn name(&self) -> &'static str {
        "RequestModifier"
    }

    fn encode(&self, msg: &InvData) -> Result<Vec<u8>> {
        self.inner.encode(msg)
    }

    fn decode(&self, bytes: &[u8]) -> Result<InvData> {
        self.inner.decode(bytes)
    }
}
