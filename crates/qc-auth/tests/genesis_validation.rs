//! # Genesis Validation Properties
//!
//! Property tests for `validate_genesis`:
//!
//! 1. Parameters: fails iff one of the five parameters is zero
//! 2. Duplicates: fails iff two accounts share an address, reporting the
//!    first repeat in document order
//! 3. Predicates: with unique addresses, fails iff some account's own
//!    validation fails

use std::collections::HashSet;

use proptest::prelude::*;
use qc_auth::{
    validate_genesis, AccountError, BaseAccount, Coin, GenesisAccount, GenesisError,
    GenesisState, Params, ValidatableAccount,
};

#[derive(Debug, Clone)]
struct FixtureAccount {
    address: String,
    valid: bool,
}

impl ValidatableAccount for FixtureAccount {
    fn address(&self) -> &str {
        &self.address
    }

    fn validate(&self) -> Result<(), AccountError> {
        if self.valid {
            Ok(())
        } else {
            Err(AccountError::InvalidCoins(format!("fixture {}", self.address)))
        }
    }
}

fn params_strategy() -> impl Strategy<Value = Params> {
    (0u64..3, 0u64..3, 0u64..3, 0u64..3, 0u64..3).prop_map(|(a, b, c, d, e)| Params {
        max_memo_characters: a,
        tx_sig_limit: b,
        tx_size_cost_per_byte: c,
        sig_verify_cost_ed25519: d,
        sig_verify_cost_secp256k1: e,
    })
}

fn first_repeat(addresses: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    addresses.iter().find(|a| !seen.insert(a.as_str())).cloned()
}

proptest! {
    #[test]
    fn prop_params_fail_iff_any_zero(params in params_strategy()) {
        let any_zero = [
            params.max_memo_characters,
            params.tx_sig_limit,
            params.tx_size_cost_per_byte,
            params.sig_verify_cost_ed25519,
            params.sig_verify_cost_secp256k1,
        ]
        .contains(&0);

        let result = validate_genesis::<FixtureAccount>(&params, &[]);
        prop_assert_eq!(result.is_err(), any_zero);
        if let Err(err) = result {
            let is_param_error = matches!(err, GenesisError::InvalidParam { value: 0, .. });
            prop_assert!(is_param_error);
        }
    }

    #[test]
    fn prop_duplicates_fail_with_first_repeat(
        addresses in proptest::collection::vec("[a-d]", 0..8)
    ) {
        let accounts: Vec<FixtureAccount> = addresses
            .iter()
            .map(|a| FixtureAccount { address: a.clone(), valid: true })
            .collect();

        let result = validate_genesis(&Params::default(), &accounts);
        match first_repeat(&addresses) {
            Some(expected) => prop_assert_eq!(
                result,
                Err(GenesisError::DuplicateAccount { address: expected })
            ),
            None => prop_assert!(result.is_ok()),
        }
    }

    #[test]
    fn prop_unique_accounts_fail_iff_predicate_fails(
        validity in proptest::collection::vec(any::<bool>(), 0..10)
    ) {
        let accounts: Vec<FixtureAccount> = validity
            .iter()
            .enumerate()
            .map(|(i, valid)| FixtureAccount { address: format!("addr{}", i), valid: *valid })
            .collect();

        let result = validate_genesis(&Params::default(), &accounts);
        match validity.iter().position(|valid| !valid) {
            Some(index) => {
                let expected = format!("addr{}", index);
                let names_first_invalid = matches!(
                    &result,
                    Err(GenesisError::InvalidAccount { address, .. }) if *address == expected
                );
                prop_assert!(names_first_invalid);
            }
            None => prop_assert!(result.is_ok()),
        }
    }
}

#[test]
fn test_zero_tx_size_cost_names_field() {
    let params = Params {
        tx_size_cost_per_byte: 0,
        ..Params::default()
    };

    let err = validate_genesis::<FixtureAccount>(&params, &[]).unwrap_err();
    assert!(err.to_string().contains("tx_size_cost_per_byte"));
}

#[test]
fn test_duplicate_addr1_reported_not_param_error() {
    let params = Params {
        tx_sig_limit: 7,
        ..Params::default()
    };
    let stake = vec![Coin::new("stake", 10)];
    let genesis = GenesisState::new(
        params,
        vec![
            GenesisAccount::from(BaseAccount::new("addr1", 0).with_coins(stake.clone())),
            GenesisAccount::from(BaseAccount::new("addr2", 1).with_coins(stake.clone())),
            GenesisAccount::from(BaseAccount::new("addr1", 2).with_coins(stake)),
        ],
    );

    let err = genesis.validate().unwrap_err();
    assert_eq!(
        err,
        GenesisError::DuplicateAccount {
            address: "addr1".to_string()
        }
    );
    assert!(err.to_string().contains("addr1"));
}

#[test]
fn test_duplicate_checked_before_predicate_of_repeat() {
    let accounts = vec![
        FixtureAccount {
            address: "addr1".to_string(),
            valid: true,
        },
        FixtureAccount {
            address: "addr1".to_string(),
            valid: false,
        },
    ];

    assert_eq!(
        validate_genesis(&Params::default(), &accounts),
        Err(GenesisError::DuplicateAccount {
            address: "addr1".to_string()
        })
    );
}

#[test]
fn test_unset_param_in_document_is_invalid_param() {
    let json = r#"{
        "params": {
            "max_memo_characters": 256,
            "tx_size_cost_per_byte": 10,
            "sig_verify_cost_ed25519": 590,
            "sig_verify_cost_secp256k1": 1000
        },
        "accounts": []
    }"#;

    let result = GenesisState::from_json(json).and_then(|genesis| genesis.validate());
    assert_eq!(
        result,
        Err(GenesisError::InvalidParam {
            param: "tx_sig_limit",
            value: 0
        })
    );
}
