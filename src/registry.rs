//! # Message Registry
//!
//! Explicit mapping from wire code to codec instance.
//!
//! Built once at process start from a [`CodecConfig`] plus the injected
//! sync-info codec, then treated as read-only. An external dispatcher hands
//! inbound `(code, payload)` pairs to [`MessageRegistry::decode`] and
//! outbound [`Message`] values to [`MessageRegistry::encode`]; routing by
//! code stays in one place instead of being scattered across call sites.

use tracing::trace;

use crate::codec::codes;
use crate::codec::inv::{InvCodec, RequestModifierCodec};
use crate::codec::modifiers::ModifiersCodec;
use crate::codec::peers::{GetPeersCodec, PeersCodec};
use crate::codec::sync_info::SyncInfoCodec;
use crate::codec::MessageCodec;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::types::{InvData, ModifiersData, PeerAddress};

/// A decoded wire message, one variant per registered codec.
///
/// `S` is the consensus-defined sync-info value.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<S> {
    SyncInfo(S),
    RequestModifier(InvData),
    Modifiers(ModifiersData),
    Inv(InvData),
    GetPeers,
    Peers(Vec<PeerAddress>),
}

impl<S> Message<S> {
    /// Wire code this message is framed under.
    pub fn code(&self) -> u8 {
        match self {
            Message::SyncInfo(_) => SyncInfoCodec::<S>::CODE,
            Message::RequestModifier(_) => RequestModifierCodec::CODE,
            Message::Modifiers(_) => ModifiersCodec::CODE,
            Message::Inv(_) => InvCodec::CODE,
            Message::GetPeers => GetPeersCodec::CODE,
            Message::Peers(_) => PeersCodec::CODE,
        }
    }
}

/// One instance of every codec, keyed by wire code.
pub struct MessageRegistry<S> {
    sync_info: SyncInfoCodec<S>,
    request_modifier: RequestModifierCodec,
    modifiers: ModifiersCodec,
    inv: InvCodec,
    get_peers: GetPeersCodec,
    peers: PeersCodec,
}

impl<S: Send + Sync> MessageRegistry<S> {
    pub fn new(config: &CodecConfig, sync_info: SyncInfoCodec<S>) -> Self {
        Self {
            sync_info,
            request_modifier: RequestModifierCodec::new(config.max_inv_objects),
            modifiers: ModifiersCodec::new(config.max_message_size),
            inv: InvCodec::new(config.max_inv_objects),
            get_peers: GetPeersCodec::new(),
            peers: PeersCodec::new(),
        }
    }

    /// Decode an inbound payload framed under `code`.
    pub fn decode(&self, code: u8, payload: &[u8]) -> Result<Message<S>> {
        trace!(code, len = payload.len(), name = Self::name_of(code), "decoding message");
        match code {
            codes::SYNC => self.sync_info.decode(payload).map(Message::SyncInfo),
            codes::REQUEST_MODIFIER => self
                .request_modifier
                .decode(payload)
                .map(Message::RequestModifier),
            codes::MODIFIER => self.modifiers.decode(payload).map(Message::Modifiers),
            codes::INV => self.inv.decode(payload).map(Message::Inv),
            codes::GET_PEERS => self.get_peers.decode(payload).map(|()| Message::GetPeers),
            codes::PEERS => self.peers.decode(payload).map(Message::Peers),
            other => Err(CodecError::UnknownMessageCode(other)),
        }
    }

    /// Encode an outbound message, returning its wire code and payload.
    pub fn encode(&self, msg: &Message<S>) -> Result<(u8, Vec<u8>)> {
        let payload = match msg {
            Message::SyncInfo(info) => self.sync_info.encode(info)?,
            Message::RequestModifier(data) => self.request_modifier.encode(data)?,
            Message::Modifiers(data) => self.modifiers.encode(data)?,
            Message::Inv(data) => self.inv.encode(data)?,
            Message::GetPeers => self.get_peers.encode(&())?,
            Message::Peers(list) => self.peers.encode(list)?,
        };
        Ok((msg.code(), payload))
    }

    /// Human-readable name for a wire code, for routing labels and logs.
    pub fn name_of(code: u8) -> Option<&'static str> {
        match code {
            codes::SYNC => Some("Sync"),
            codes::REQUEST_MODIFIER => Some("RequestModifier"),
            codes::MODIFIER => Some("Modifier"),
            codes::INV => Some("Inv"),
            codes::GET_PEERS => Some("GetPeers"),
            codes::PEERS => Some("Peers"),
            _ => None,
        }
    }

    /// All registered wire codes.
    pub fn codes() -> [u8; 6] {
        [
            codes::SYNC,
            codes::REQUEST_MODIFIER,
            codes::MODIFIER,
            codes::INV,
            codes::GET_PEERS,
            codes::PEERS,
        ]
    }
}
