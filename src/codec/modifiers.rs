//! Modifiers codec: identifier → payload maps with an encode-side byte budget.
//!
//! ## Wire Format
//! ```text
//! [Type(1)] [IncludedCount(4, BE)] ( [Id(32)] [Len(4, BE)] [Payload(Len)] )*
//! ```
//!
//! Size limiting is an encode-time policy only. Encode drops entries that
//! would push the output past `max_message_size` and logs the overage;
//! decode trusts the declared count and length fields, because tightening
//! it would change which messages the protocol accepts. The one decode-side
//! defense is a pre-allocation check of the declared count against the
//! actual buffer length.

use bytes::BufMut;
use indexmap::IndexMap;
use tracing::warn;

use crate::codec::{ByteReader, MessageCodec};
use crate::error::{CodecError, Result};
use crate::types::{ModifierId, ModifierTypeId, ModifiersData, MODIFIER_ID_SIZE};

/// Bytes occupied by the type byte and the entry-count field.
pub const HEADER_SIZE: usize = 5;

/// Smallest possible wire footprint of one entry: identifier plus an empty
/// payload's length field.
const MIN_ENTRY_SIZE: usize = MODIFIER_ID_SIZE + 4;

/// Codec for modifier payload messages.
#[derive(Debug, Clone, Copy)]
pub struct ModifiersCodec {
    max_message_size: usize,
}

impl ModifiersCodec {
    /// Wire code for modifier payload messages.
    pub const CODE: u8 = super::codes::MODIFIER;

    pub const fn new(max_message_size: usize) -> Self {
        Self { max_message_size }
    }
}

impl MessageCodec for ModifiersCodec {
    type Message = ModifiersData;

    fn code(&self) -> u8 {
        Self::CODE
    }

    fn name(&self) -> &'static str {
        "Modifier"
    }

    fn encode(&self, msg: &ModifiersData) -> Result<Vec<u8>> {
        if msg.modifiers.is_empty() {
            return Err(CodecError::EmptyList);
        }

        let mut included: Vec<(&ModifierId, &Vec<u8>)> = Vec::with_capacity(msg.modifiers.len());
        let mut budgeted = HEADER_SIZE;
        let mut true_total = HEADER_SIZE;

        for (id, payload) in &msg.modifiers {
            let entry_size = MIN_ENTRY_SIZE + payload.len();
            true_total += entry_size;
            if budgeted + entry_size <= self.max_message_size {
                budgeted += entry_size;
                included.push((id, payload));
            }
        }

        if true_total > self.max_message_size {
            // Not an error: the message still goes out, just smaller than
            // the logical input. Callers split oversized sets higher up.
            warn!(
                included = included.len(),
                dropped = msg.modifiers.len() - included.len(),
                overage = true_total - self.max_message_size,
                max_message_size = self.max_message_size,
                "modifiers exceed message budget, truncating"
            );
        }

        let mut buf = Vec::with_capacity(budgeted);
        buf.put_u8(msg.type_id.0);
        buf.put_u32(included.len() as u32);
        for (id, payload) in included {
            buf.put_slice(id.as_bytes());
            buf.put_u32(payload.len() as u32);
            buf.put_slice(payload);
        }
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<ModifiersData> {
        let mut reader = ByteReader::new(bytes);
        let type_id = ModifierTypeId(reader.read_u8()?);
        let count = reader.read_u32()?;

        // A declared count that cannot physically fit in the buffer is
        // rejected before any allocation happens.
        let min_needed = count as usize * MIN_ENTRY_SIZE;
        if reader.remaining() < min_needed {
            return Err(CodecError::Truncated {
                needed: min_needed - reader.remaining(),
                remaining: reader.remaining(),
            });
        }

        let mut modifiers = IndexMap::with_capacity(count as usize);
        for _ in 0..count {
            let id = ModifierId::from_slice(reader.read_bytes(MODIFIER_ID_SIZE)?)?;
            let len = reader.read_u32()? as usize;
            let payload = reader.read_bytes(len)?.to_vec();
            // duplicate ids: last write wins
            modifiers.insert(id, payload);
        }
        Ok(ModifiersData { type_id, modifiers })
    }
}
