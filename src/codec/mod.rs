//! # Message Codecs
//!
//! One codec per wire-message kind, all implementing [`MessageCodec`].
//!
//! Every codec is a pure, stateless value: the only data it holds are
//! limits fixed at construction, so instances are freely shared across
//! threads. Decoding validates structure and bounds before allocating;
//! encoding fails only when the caller violates a documented precondition.
//!
//! ## Components
//! - **Inv / RequestModifier**: identifier announcements and requests
//! - **SyncInfo**: opaque passthrough for consensus-defined payloads
//! - **Modifiers**: identifier → payload maps with an encode-side byte budget
//! - **Peers / GetPeers**: address exchange

pub mod inv;
pub mod modifiers;
pub mod peers;
pub mod sync_info;

use crate::error::{CodecError, Result};

/// Wire codes for every registered message kind.
///
/// | Message         | Code |
/// |-----------------|------|
/// | Sync            | 65   |
/// | RequestModifier | 22   |
/// | Modifier        | 33   |
/// | Inv             | 55   |
/// | GetPeers        | 1    |
/// | Peers           | 2    |
pub mod codes {
    pub const SYNC: u8 = 65;
    pub const REQUEST_MODIFIER: u8 = 22;
    pub const MODIFIER: u8 = 33;
    pub const INV: u8 = 55;
    pub const GET_PEERS: u8 = 1;
    pub const PEERS: u8 = 2;
}

/// Contract implemented by every wire-message codec.
///
/// Each implementor is tagged with a stable wire code and a human-readable
/// name used for routing and log labels.
pub trait MessageCodec: Send + Sync {
    /// The in-memory value this codec carries.
    type Message;

    /// Stable one-byte wire code identifying this message kind.
    fn code(&self) -> u8;

    /// Human-readable message name for routing and diagnostics.
    fn name(&self) -> &'static str;

    /// Serialize a value to its wire layout.
    ///
    /// Fails only on caller precondition violations (empty lists,
    /// over-limit counts); structurally valid input always encodes.
    fn encode(&self, msg: &Self::Message) -> Result<Vec<u8>>;

    /// Parse a wire payload, rejecting malformed or out-of-bounds input.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Message>;
}

/// Checked big-endian cursor over an inbound buffer.
///
/// Every read verifies the remaining length first, so a hostile length
/// field surfaces as [`CodecError::Truncated`] instead of a panic, and
/// callers can pre-check declared counts against `remaining()` before
/// allocating.
pub(crate) struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        // read_bytes guarantees the slice is exactly 4 bytes
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(CodecError::Truncated {
                needed: len - self.remaining(),
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}
