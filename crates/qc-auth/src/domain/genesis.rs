//! # Auth Genesis State
//!
//! The auth module's genesis snapshot and the check that gates it before
//! simulation or node startup.
//!
//! ## Validation Order
//!
//! 1. Parameters, first zero value wins
//! 2. Accounts in document order: duplicate address, then the account's
//!    own predicate
//!
//! Fail-fast: the first violation is returned with enough context to
//! locate the bad record.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::account::{GenesisAccount, ValidatableAccount};
use super::errors::GenesisError;
use super::params::Params;

/// All auth state that must be provided at genesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Module parameters.
    pub params: Params,
    /// Genesis accounts, in document order.
    #[serde(default)]
    pub accounts: Vec<GenesisAccount>,
}

impl GenesisState {
    /// Create a new genesis state.
    pub fn new(params: Params, accounts: Vec<GenesisAccount>) -> Self {
        Self { params, accounts }
    }

    /// Validate this snapshot. See [`validate_genesis`].
    pub fn validate(&self) -> Result<(), GenesisError> {
        validate_genesis(&self.params, &self.accounts)
    }

    /// Decode a snapshot from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a snapshot from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GenesisError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, GenesisError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Validate auth genesis data.
///
/// Returns the first violation found:
/// - `InvalidParam` for a zero parameter
/// - `DuplicateAccount` for a repeated address
/// - `InvalidAccount` for an account failing its own predicate
pub fn validate_genesis<A: ValidatableAccount>(
    params: &Params,
    accounts: &[A],
) -> Result<(), GenesisError> {
    params.validate()?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(accounts.len());
    for account in accounts {
        let address = account.address();
        if !seen.insert(address) {
            return Err(GenesisError::DuplicateAccount {
                address: address.to_string(),
            });
        }

        account
            .validate()
            .map_err(|source| GenesisError::InvalidAccount {
                address: address.to_string(),
                source,
            })?;
    }

    debug!(
        accounts = accounts.len(),
        "[Auth] Genesis state passed validation"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{BaseAccount, Coin};
    use crate::domain::errors::AccountError;

    /// Account whose predicate outcome is fixed by the test.
    struct StubAccount {
        address: String,
        valid: bool,
    }

    impl StubAccount {
        fn new(address: &str, valid: bool) -> Self {
            Self {
                address: address.to_string(),
                valid,
            }
        }
    }

    impl ValidatableAccount for StubAccount {
        fn address(&self) -> &str {
            &self.address
        }

        fn validate(&self) -> Result<(), AccountError> {
            if self.valid {
                Ok(())
            } else {
                Err(AccountError::InvalidCoins("stub failure".to_string()))
            }
        }
    }

    #[test]
    fn test_default_genesis_valid() {
        assert!(GenesisState::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_address_rejected() {
        let accounts = vec![
            StubAccount::new("addr1", true),
            StubAccount::new("addr2", true),
            StubAccount::new("addr1", true),
        ];

        assert_eq!(
            validate_genesis(&Params::default(), &accounts),
            Err(GenesisError::DuplicateAccount {
                address: "addr1".to_string()
            })
        );
    }

    #[test]
    fn test_first_duplicate_reported() {
        let accounts = vec![
            StubAccount::new("b", true),
            StubAccount::new("a", true),
            StubAccount::new("a", true),
            StubAccount::new("b", true),
        ];

        match validate_genesis(&Params::default(), &accounts) {
            Err(GenesisError::DuplicateAccount { address }) => assert_eq!(address, "a"),
            other => panic!("Expected DuplicateAccount, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_account_wraps_cause() {
        let accounts = vec![
            StubAccount::new("addr1", true),
            StubAccount::new("addr2", false),
        ];

        assert_eq!(
            validate_genesis(&Params::default(), &accounts),
            Err(GenesisError::InvalidAccount {
                address: "addr2".to_string(),
                source: AccountError::InvalidCoins("stub failure".to_string()),
            })
        );
    }

    #[test]
    fn test_params_checked_before_accounts() {
        let params = Params {
            max_memo_characters: 0,
            ..Params::default()
        };
        let accounts = vec![StubAccount::new("x", true), StubAccount::new("x", true)];

        assert!(matches!(
            validate_genesis(&params, &accounts),
            Err(GenesisError::InvalidParam {
                param: "max_memo_characters",
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_not_param_error() {
        let params = Params {
            tx_sig_limit: 7,
            ..Params::default()
        };
        let genesis = GenesisState::new(
            params,
            vec![
                BaseAccount::new("addr1", 0).into(),
                BaseAccount::new("addr1", 1).into(),
            ],
        );

        assert_eq!(
            genesis.validate(),
            Err(GenesisError::DuplicateAccount {
                address: "addr1".to_string()
            })
        );
    }

    #[test]
    fn test_genesis_json_roundtrip_validates() {
        let json = r#"{
            "params": {
                "max_memo_characters": 256,
                "tx_sig_limit": 7,
                "tx_size_cost_per_byte": 10,
                "sig_verify_cost_ed25519": 590,
                "sig_verify_cost_secp256k1": 1000
            },
            "accounts": [
                {
                    "type": "base",
                    "address": "addr1",
                    "account_number": 0,
                    "sequence": 0,
                    "coins": [{ "denom": "stake", "amount": 10 }]
                }
            ]
        }"#;

        let genesis = GenesisState::from_json(json).unwrap();
        assert_eq!(genesis.accounts.len(), 1);
        assert_eq!(
            genesis.accounts[0],
            GenesisAccount::Base(BaseAccount::new("addr1", 0).with_coins(vec![Coin::new("stake", 10)]))
        );
        assert!(genesis.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        assert!(matches!(
            GenesisState::from_json("{\"params\": 5}"),
            Err(GenesisError::Decode(_))
        ));
    }
}
