//! # Core Simulation Entities
//!
//! Value types exchanged between the coordinator and the modules it drives.
//!
//! ## Clusters
//!
//! - **Genesis**: `GenesisStateMap` (module name → raw state fragment)
//! - **Governance fixtures**: `ParamChange`
//! - **Store inspection**: `KvPair`
//! - **Accounts**: `SimAccount`, `random_accounts`

use std::collections::BTreeMap;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

// =============================================================================
// CLUSTER A: GENESIS
// =============================================================================

/// Raw genesis document under construction.
///
/// Keys are module names, values are each module's opaque state fragment.
/// A `BTreeMap` keeps the serialized document stable across runs.
pub type GenesisStateMap = BTreeMap<String, serde_json::Value>;

// =============================================================================
// CLUSTER B: GOVERNANCE FIXTURES
// =============================================================================

/// A randomized parameter-change candidate.
///
/// Used as a fixture when fuzzing parameter-change proposals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamChange {
    /// Parameter subspace, normally the owning module's name.
    pub subspace: String,
    /// Parameter key inside the subspace.
    pub key: String,
    /// JSON-encoded randomized value.
    pub value: String,
}

impl ParamChange {
    /// Create a new candidate.
    pub fn new(
        subspace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            subspace: subspace.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// `subspace/key`, the form used to identify the parameter in proposals.
    pub fn composite_key(&self) -> String {
        format!("{}/{}", self.subspace, self.key)
    }
}

// =============================================================================
// CLUSTER C: STORE INSPECTION
// =============================================================================

/// A raw key/value entry read from a module's store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KvPair {
    /// Raw key bytes.
    pub key: Vec<u8>,
    /// Raw value bytes.
    pub value: Vec<u8>,
}

impl KvPair {
    /// Create a new pair.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// CLUSTER D: ACCOUNTS
// =============================================================================

/// A simulated account: a random compressed public key and its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimAccount {
    /// `0x`-prefixed lowercase hex of the 20-byte address.
    pub address: String,
    /// 33-byte compressed public key.
    pub pub_key: Vec<u8>,
}

impl SimAccount {
    /// Draw one account from the randomness source.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        let mut pub_key = vec![0u8; 33];
        rng.fill_bytes(&mut pub_key[1..]);
        // Compressed SEC1 prefix: 0x02 or 0x03 depending on parity.
        pub_key[0] = 0x02 | (pub_key[32] & 0x01);

        Self {
            address: derive_address(&pub_key),
            pub_key,
        }
    }
}

/// Draw `n` accounts from the randomness source, in order.
pub fn random_accounts(rng: &mut dyn RngCore, n: usize) -> Vec<SimAccount> {
    (0..n).map(|_| SimAccount::random(rng)).collect()
}

/// Derive an address from a public key.
fn derive_address(pub_key: &[u8]) -> String {
    // Keccak256 of public key, take last 20 bytes
    let hash = Keccak256::digest(pub_key);
    format!("0x{}", hex::encode(&hash[12..32]))
}
