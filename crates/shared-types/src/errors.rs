//! # Error Types
//!
//! Errors a simulation module can hand back to the coordinator.

use thiserror::Error;

/// Errors raised by a module while contributing simulation state.
///
/// A module that cannot produce valid random state is defective; the
/// coordinator never recovers from these, it attributes and propagates them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModuleError {
    /// The module's state fragment could not be encoded or decoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The module produced state that breaks its own invariants.
    #[error("Invalid module state: {0}")]
    InvalidState(String),
}

impl From<serde_json::Error> for ModuleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

/// Errors raised by a store decoder while rendering raw entries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The key does not belong to any layout the decoder knows.
    #[error("Unknown store key: 0x{0}")]
    UnknownKey(String),

    /// The value bytes could not be interpreted.
    #[error("Malformed store value: {0}")]
    Malformed(String),
}
