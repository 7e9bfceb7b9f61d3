//! # Genesis Accounts
//!
//! Account records carried in the auth genesis and their self-validation
//! predicates.

use serde::{Deserialize, Serialize};

use super::errors::AccountError;

/// An account that can be checked for duplicates and validated on its own.
pub trait ValidatableAccount {
    /// String form of the account address. Uniqueness is checked on this.
    fn address(&self) -> &str;

    /// Account-specific validation.
    fn validate(&self) -> Result<(), AccountError>;
}

/// A token amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Token denomination, e.g. `stake`.
    pub denom: String,
    /// Amount, strictly positive in a valid coin set.
    pub amount: u64,
}

impl Coin {
    /// Create a new coin.
    pub fn new(denom: impl Into<String>, amount: u64) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Check a denomination: a lowercase letter followed by 2-15 lowercase
/// letters or digits.
fn is_valid_denom(denom: &str) -> bool {
    let bytes = denom.as_bytes();
    if !(3..=16).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Validate a coin set: valid denoms, positive amounts, denoms strictly
/// ascending.
pub fn validate_coins(coins: &[Coin]) -> Result<(), String> {
    for coin in coins {
        if !is_valid_denom(&coin.denom) {
            return Err(format!("invalid denom '{}'", coin.denom));
        }
        if coin.amount == 0 {
            return Err(format!("zero amount for denom '{}'", coin.denom));
        }
    }

    for pair in coins.windows(2) {
        if pair[0].denom >= pair[1].denom {
            return Err(format!(
                "denoms not sorted or duplicated: '{}' then '{}'",
                pair[0].denom, pair[1].denom
            ));
        }
    }

    Ok(())
}

/// A plain account: address, optional key and balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    /// Address string form.
    pub address: String,
    /// Hex-encoded public key, absent until the account first signs.
    #[serde(default)]
    pub pub_key: Option<String>,
    /// Global account number.
    pub account_number: u64,
    /// Next expected transaction sequence.
    pub sequence: u64,
    /// Balance, sorted by denom.
    #[serde(default)]
    pub coins: Vec<Coin>,
}

impl BaseAccount {
    /// Create an account with no key and no balance.
    pub fn new(address: impl Into<String>, account_number: u64) -> Self {
        Self {
            address: address.into(),
            pub_key: None,
            account_number,
            sequence: 0,
            coins: Vec::new(),
        }
    }

    /// Set the balance.
    pub fn with_coins(mut self, coins: Vec<Coin>) -> Self {
        self.coins = coins;
        self
    }

    /// Balance for one denomination (0 when absent).
    pub fn balance_of(&self, denom: &str) -> u64 {
        self.coins
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(0)
    }
}

impl ValidatableAccount for BaseAccount {
    fn address(&self) -> &str {
        &self.address
    }

    fn validate(&self) -> Result<(), AccountError> {
        if self.address.is_empty() {
            return Err(AccountError::EmptyAddress);
        }
        validate_coins(&self.coins).map_err(AccountError::InvalidCoins)
    }
}

/// An account whose balance vests linearly between two timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousVestingAccount {
    /// Underlying account.
    pub base: BaseAccount,
    /// Coins locked at `start_time`.
    pub original_vesting: Vec<Coin>,
    /// Vesting start (Unix seconds).
    pub start_time: u64,
    /// Vesting end (Unix seconds).
    pub end_time: u64,
}

impl ValidatableAccount for ContinuousVestingAccount {
    fn address(&self) -> &str {
        &self.base.address
    }

    fn validate(&self) -> Result<(), AccountError> {
        self.base.validate()?;

        validate_coins(&self.original_vesting).map_err(AccountError::InvalidVesting)?;

        if self.start_time >= self.end_time {
            return Err(AccountError::InvalidVesting(format!(
                "start time {} must be before end time {}",
                self.start_time, self.end_time
            )));
        }

        for coin in &self.original_vesting {
            let balance = self.base.balance_of(&coin.denom);
            if coin.amount > balance {
                return Err(AccountError::InvalidVesting(format!(
                    "vesting amount {}{} exceeds balance {}{}",
                    coin.amount, coin.denom, balance, coin.denom
                )));
            }
        }

        Ok(())
    }
}

/// Any account kind accepted in the auth genesis document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenesisAccount {
    /// Plain account.
    Base(BaseAccount),
    /// Continuously vesting account.
    ContinuousVesting(ContinuousVestingAccount),
}

impl ValidatableAccount for GenesisAccount {
    fn address(&self) -> &str {
        match self {
            Self::Base(acc) => acc.address(),
            Self::ContinuousVesting(acc) => acc.address(),
        }
    }

    fn validate(&self) -> Result<(), AccountError> {
        match self {
            Self::Base(acc) => acc.validate(),
            Self::ContinuousVesting(acc) => acc.validate(),
        }
    }
}

impl From<BaseAccount> for GenesisAccount {
    fn from(acc: BaseAccount) -> Self {
        Self::Base(acc)
    }
}

impl From<ContinuousVestingAccount> for GenesisAccount {
    fn from(acc: ContinuousVestingAccount) -> Self {
        Self::ContinuousVesting(acc)
    }
}
