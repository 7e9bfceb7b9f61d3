//! # Auth Parameters
//!
//! Transaction-cost and signature limits carried in the auth genesis.
//! Every value must be strictly positive; zero marks a mis-configured or
//! corrupt snapshot.

use serde::{Deserialize, Serialize};

use super::errors::GenesisError;

/// Parameter key for `max_memo_characters`.
pub const KEY_MAX_MEMO_CHARACTERS: &str = "MaxMemoCharacters";
/// Parameter key for `tx_sig_limit`.
pub const KEY_TX_SIG_LIMIT: &str = "TxSigLimit";
/// Parameter key for `tx_size_cost_per_byte`.
pub const KEY_TX_SIZE_COST_PER_BYTE: &str = "TxSizeCostPerByte";
/// Parameter key for `sig_verify_cost_ed25519`.
pub const KEY_SIG_VERIFY_COST_ED25519: &str = "SigVerifyCostED25519";
/// Parameter key for `sig_verify_cost_secp256k1`.
pub const KEY_SIG_VERIFY_COST_SECP256K1: &str = "SigVerifyCostSecp256k1";

pub const DEFAULT_MAX_MEMO_CHARACTERS: u64 = 256;
pub const DEFAULT_TX_SIG_LIMIT: u64 = 7;
pub const DEFAULT_TX_SIZE_COST_PER_BYTE: u64 = 10;
pub const DEFAULT_SIG_VERIFY_COST_ED25519: u64 = 590;
pub const DEFAULT_SIG_VERIFY_COST_SECP256K1: u64 = 1000;

/// Auth module parameters.
///
/// A field missing from a loaded document reads as zero, so validation
/// reports it as an invalid parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Maximum number of characters in a transaction memo.
    #[serde(default)]
    pub max_memo_characters: u64,
    /// Maximum number of signatures per transaction.
    #[serde(default)]
    pub tx_sig_limit: u64,
    /// Gas charged per byte of transaction size.
    #[serde(default)]
    pub tx_size_cost_per_byte: u64,
    /// Gas charged per ED25519 signature verification.
    #[serde(default)]
    pub sig_verify_cost_ed25519: u64,
    /// Gas charged per Secp256k1 signature verification.
    #[serde(default)]
    pub sig_verify_cost_secp256k1: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_memo_characters: DEFAULT_MAX_MEMO_CHARACTERS,
            tx_sig_limit: DEFAULT_TX_SIG_LIMIT,
            tx_size_cost_per_byte: DEFAULT_TX_SIZE_COST_PER_BYTE,
            sig_verify_cost_ed25519: DEFAULT_SIG_VERIFY_COST_ED25519,
            sig_verify_cost_secp256k1: DEFAULT_SIG_VERIFY_COST_SECP256K1,
        }
    }
}

impl Params {
    /// Check that every parameter is strictly positive.
    ///
    /// Stops at the first zero value, in a fixed order.
    pub fn validate(&self) -> Result<(), GenesisError> {
        let checks = [
            ("tx_sig_limit", self.tx_sig_limit),
            ("sig_verify_cost_ed25519", self.sig_verify_cost_ed25519),
            ("sig_verify_cost_secp256k1", self.sig_verify_cost_secp256k1),
            ("max_memo_characters", self.max_memo_characters),
            ("tx_size_cost_per_byte", self.tx_size_cost_per_byte),
        ];

        for (param, value) in checks {
            if value == 0 {
                return Err(GenesisError::InvalidParam { param, value });
            }
        }

        Ok(())
    }
}
