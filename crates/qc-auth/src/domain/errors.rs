//! # Auth Errors
//!
//! Error types for genesis validation and account self-validation.

use thiserror::Error;

/// Errors raised by an account's own validation predicate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    /// The account has no address.
    #[error("Account address cannot be empty")]
    EmptyAddress,

    /// The account's balance is not a valid coin set.
    #[error("Invalid coins: {0}")]
    InvalidCoins(String),

    /// The vesting schedule is inconsistent.
    #[error("Invalid vesting schedule: {0}")]
    InvalidVesting(String),
}

/// Errors raised while validating or loading an auth genesis snapshot.
///
/// Validation is fail-fast: the first violation found is reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenesisError {
    /// A required numeric parameter is zero.
    #[error("Invalid genesis parameter {param}: {value}")]
    InvalidParam { param: &'static str, value: u64 },

    /// Two accounts share the same address.
    #[error("Duplicate account found in genesis state; address: {address}")]
    DuplicateAccount { address: String },

    /// An account failed its own validation predicate.
    #[error("Invalid account found in genesis state; address: {address}, error: {source}")]
    InvalidAccount {
        address: String,
        #[source]
        source: AccountError,
    },

    /// The genesis document could not be decoded.
    #[error("Malformed genesis document: {0}")]
    Decode(String),

    /// The module's fragment is absent from the genesis map.
    #[error("Genesis state for module '{0}' not found")]
    MissingModule(String),
}

impl From<serde_json::Error> for GenesisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
