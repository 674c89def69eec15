//! Sync-info codec: a framing wrapper around a consensus-defined payload.
//!
//! The chain-synchronization value's byte representation belongs to the
//! consensus layer, not to this crate. This codec exists to pin the wire
//! code and pass bytes through unchanged; the parse and serialize functions
//! are injected at construction.

use std::fmt;
use std::sync::Arc;

use crate::codec::MessageCodec;
use crate::error::Result;

type ParseFn<S> = dyn Fn(&[u8]) -> Result<S> + Send + Sync;
type SerializeFn<S> = dyn Fn(&S) -> Vec<u8> + Send + Sync;

/// Codec for opaque chain-synchronization payloads.
///
/// Decode failures from the injected parser surface unchanged as this
/// codec's decode failure; encode always succeeds.
pub struct SyncInfoCodec<S> {
    parse: Arc<ParseFn<S>>,
    serialize: Arc<SerializeFn<S>>,
}

impl<S> SyncInfoCodec<S> {
    /// Wire code for sync-info messages.
    pub const CODE: u8 = crate::codec::codes::SYNC;

    pub fn new<P, W>(parse: P, serialize: W) -> Self
    where
        P: Fn(&[u8]) -> Result<S> + Send + Sync + 'static,
        W: Fn(&S) -> Vec<u8> + Send + Sync + 'static,
    {
        Self {
            parse: Arc::new(parse),
            serialize: Arc::new(serialize),
        }
    }
}

impl<S> Clone for SyncInfoCodec<S> {
    fn clone(&self) -> Self {
        Self {
            parse: Arc::clone(&self.parse),
            serialize: Arc::clone(&self.serialize),
        }
    }
}

impl<S> fmt::Debug for SyncInfoCodec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncInfoCodec")
            .field("code", &Self::CODE)
            .finish_non_exhaustive()
    }
}

impl<S: Send + Sync> MessageCodec for SyncInfoCodec<S> {
    type Message = S;

    fn code(&self) -> u8 {
        Self::CODE
    }

    fn name(&self) -> &'static str {
        "Sync"
    }

    fn encode(&self, msg: &S) -> Result<Vec<u8>> {
        Ok((self.serialize)(msg))
    }

    fn decode(&self, bytes: &[u8]) -> Result<S> {
        (self.parse)(bytes)
    }
}
