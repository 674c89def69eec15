//! # Error Types
//!
//! Typed failures for wire-message encoding and decoding.
//!
//! Every decode failure is reported to the caller as a [`CodecError`]; none
//! are silently swallowed. The single intentional exception is the Modifiers
//! encode-side truncation, which is a logged degradation rather than an
//! error (see [`crate::codec::modifiers`]).
//!
//! ## Error Categories
//! - **Structural errors**: `Truncated`, `LengthMismatch` — the buffer does
//!   not match its declared layout
//! - **Limit violations**: `EmptyList`, `LimitExceeded` — structurally sound
//!   but outside configured bounds
//! - **Protocol errors**: `NonEmptyPayload`, `UnknownMessageCode`
//! - **Pass-through**: `SyncInfo` — failures surfaced by the injected
//!   sync-info parser
//!
//! All errors implement `std::error::Error` for interoperability.

use thiserror::Error;

/// Primary error type for all codec operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// An empty identifier list or modifier set was presented for encode,
    /// or a decoded count field was zero.
    #[error("empty object list")]
    EmptyList,

    /// An inventory count exceeded the configured maximum, on either
    /// encode or decode.
    #[error("object count {count} exceeds configured limit {max}")]
    LimitExceeded { count: u32, max: u32 },

    /// A declared count or length field is inconsistent with the actual
    /// buffer size.
    #[error("declared layout needs {expected} bytes but buffer holds {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The buffer ended before the fields it declares were read.
    #[error("buffer truncated: {needed} more bytes required, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// A message defined to carry no payload arrived with one.
    #[error("unexpected payload of {0} bytes on empty-bodied message")]
    NonEmptyPayload(usize),

    /// No codec is registered under this wire code.
    #[error("unknown message code: {0}")]
    UnknownMessageCode(u8),

    /// Failure surfaced by the injected sync-info parser, unchanged.
    #[error("sync info: {0}")]
    SyncInfo(String),

    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
