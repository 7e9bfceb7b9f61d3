//! # Simulation Errors
//!
//! Errors surfaced by the coordinator and the host sequence around it.

use qc_auth::GenesisError;
use shared_types::ModuleError;
use thiserror::Error;

/// Errors returned by the coordinator's passes and the host runner.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A module failed during a pass. The pass stopped at this module.
    #[error("Module '{module}' failed: {source}")]
    Module {
        /// Registration name of the failing module.
        module: String,
        #[source]
        source: ModuleError,
    },

    /// Two module handles report the same name.
    #[error("Duplicate module name: {0}")]
    DuplicateModule(String),

    /// The generated or loaded genesis failed validation.
    #[error(transparent)]
    Genesis(#[from] GenesisError),

    /// The genesis document could not be encoded.
    #[error("Failed to encode genesis: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The genesis document could not be written.
    #[error("Failed to write genesis: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds an unparseable value.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    /// A setting is outside its allowed range.
    #[error("Invalid configuration: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_module_error_attribution() {
        let err = SimulationError::Module {
            module: "bank".to_string(),
            source: ModuleError::InvalidState("negative supply".to_string()),
        };

        let display = err.to_string();
        assert!(display.contains("bank"));
        assert!(display.contains("negative supply"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_genesis_error_transparent() {
        let err = SimulationError::from(GenesisError::DuplicateAccount {
            address: "addr1".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Duplicate account found in genesis state; address: addr1"
        );
    }
}
