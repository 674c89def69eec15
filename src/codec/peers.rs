//! Peer-list exchange codecs.
//!
//! ## Wire Format
//! ```text
//! Peers:    [Count(4, BE)] ( [Addr(4)] [Port(4, BE)] )* Count
//! GetPeers: (empty)
//! ```
//!
//! Addresses are raw IPv4 octets; the port is a full 4-byte field. The
//! peer-list length is unbounded here — capping it is higher-layer policy.

use bytes::BufMut;

use crate::codec::{ByteReader, MessageCodec};
use crate::error::{CodecError, Result};
use crate::types::PeerAddress;
use std::net::Ipv4Addr;

/// Bytes per peer entry: 4 address octets plus a 4-byte port.
const ENTRY_SIZE: usize = 8;

/// Codec for peer-address lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeersCodec;

impl PeersCodec {
    /// Wire code for peer-list messages.
    pub const CODE: u8 = super::codes::PEERS;

    pub const fn new() -> Self {
        Self
    }
}

impl MessageCodec for PeersCodec {
    type Message = Vec<PeerAddress>;

    fn code(&self) -> u8 {
        Self::CODE
    }

    fn name(&self) -> &'static str {
        "Peers"
    }

    fn encode(&self, msg: &Vec<PeerAddress>) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(4 + msg.len() * ENTRY_SIZE);
        buf.put_u32(msg.len() as u32);
        for peer in msg {
            buf.put_slice(&peer.ip.octets());
            buf.put_u32(peer.port);
        }
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<PeerAddress>> {
        let mut reader = ByteReader::new(bytes);
        let count = reader.read_u32()?;

        // The body must be exactly count entries, nothing more or less.
        let expected = count as u64 * ENTRY_SIZE as u64;
        if reader.remaining() as u64 != expected {
            return Err(CodecError::LengthMismatch {
                expected: 4 + expected as usize,
                actual: bytes.len(),
            });
        }

        let mut peers = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let octets = reader.read_bytes(4)?;
            let ip = Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);
            let port = reader.read_u32()?;
            peers.push(PeerAddress::new(ip, port));
        }
        Ok(peers)
    }
}

/// Codec for the no-payload peer-list trigger.
///
/// A pure marker message: a stable wire code and no data.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPeersCodec;

impl GetPeersCodec {
    /// Wire code for peer-list requests.
    pub const CODE: u8 = super::codes::GET_PEERS;

    pub const fn new() -> Self {
        Self
    }
}

impl MessageCodec for GetPeersCodec {
    type Message = ();

    fn code(&self) -> u8 {
        Self::CODE
    }

    fn name(&self) -> &'static str {
        "GetPeers"
    }

    fn encode(&self, _msg: &()) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn decode(&self, bytes: &[u8]) -> Result<()> {
        if !bytes.is_empty() {
            return Err(CodecError::NonEmptyPayload(bytes.len()));
        }
        Ok(())
    }
}
