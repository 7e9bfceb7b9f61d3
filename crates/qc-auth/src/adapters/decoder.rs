//! # Auth Store Decoder
//!
//! Renders raw entries of the auth account store for inspection tooling.
//!
//! ## Key Layout
//!
//! - `0x01 | address` → JSON-encoded `GenesisAccount`
//! - `globalAccountNumber` → big-endian `u64`

use shared_types::{DecodeError, KvPair};

use crate::domain::GenesisAccount;

/// Store namespace of the auth account store.
pub const STORE_KEY: &str = "acc";

/// Prefix of per-address account entries.
pub const ADDRESS_STORE_KEY_PREFIX: u8 = 0x01;

/// Key of the global account number counter.
pub const GLOBAL_ACCOUNT_NUMBER_KEY: &[u8] = b"globalAccountNumber";

/// Build the store key of an account entry.
pub fn address_store_key(address: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + address.len());
    key.push(ADDRESS_STORE_KEY_PREFIX);
    key.extend_from_slice(address.as_bytes());
    key
}

/// Decode two auth store entries sharing the same key.
pub fn decode_store(kv_a: &KvPair, kv_b: &KvPair) -> Result<String, DecodeError> {
    if kv_a.key.first() == Some(&ADDRESS_STORE_KEY_PREFIX) {
        let acc_a = decode_account(&kv_a.value)?;
        let acc_b = decode_account(&kv_b.value)?;
        return Ok(format!("{:?}\n{:?}", acc_a, acc_b));
    }

    if kv_a.key == GLOBAL_ACCOUNT_NUMBER_KEY {
        let num_a = decode_u64(&kv_a.value)?;
        let num_b = decode_u64(&kv_b.value)?;
        return Ok(format!(
            "GlobalAccNumberA: {}\nGlobalAccNumberB: {}",
            num_a, num_b
        ));
    }

    Err(DecodeError::UnknownKey(hex::encode(&kv_a.key)))
}

fn decode_account(bytes: &[u8]) -> Result<GenesisAccount, DecodeError> {
    serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))
}

fn decode_u64(bytes: &[u8]) -> Result<u64, DecodeError> {
    let arr: [u8; 8] = bytes.try_into().map_err(|_| {
        DecodeError::Malformed(format!("expected 8 bytes for u64, got {}", bytes.len()))
    })?;
    Ok(u64::from_be_bytes(arr))
}
