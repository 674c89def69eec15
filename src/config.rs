//! # Configuration Management
//!
//! Construction-time limits for the codec layer.
//!
//! Both limits are mandatory: there is no `Default` implementation, because
//! sensible values depend on the network the node participates in and a
//! silently-assumed bound is worse than a missing one.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` / `from_toml()`
//! - Direct instantiation with `CodecConfig::new()`

use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable limits shared by every codec instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Maximum number of identifiers in a single inventory or
    /// modifier-request message, on both encode and decode.
    pub max_inv_objects: u32,

    /// Byte budget for an encoded Modifiers message. Entries that would
    /// push the output past this are dropped on encode.
    pub max_message_size: usize,
}

impl CodecConfig {
    pub const fn new(max_inv_objects: u32, max_message_size: usize) -> Self {
        Self {
            max_inv_objects,
            max_message_size,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CodecError::Config(format!("failed to read config file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Validate the configuration for common misconfigurations.
    ///
    /// Returns a list of validation errors. Empty list means the
    /// configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_inv_objects == 0 {
            errors.push("max_inv_objects must be greater than 0".to_string());
        }

        if self.max_message_size == 0 {
            errors.push("max_message_size must be greater than 0".to_string());
        } else if self.max_message_size < crate::codec::modifiers::HEADER_SIZE {
            errors.push(format!(
                "max_message_size too small: {} bytes cannot hold a message header",
                self.max_message_size
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CodecError::Config(format!(
                "configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
