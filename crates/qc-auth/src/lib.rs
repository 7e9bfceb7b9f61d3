//! # Auth Module
//!
//! Genesis model and simulation support for account authentication.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): parameters, genesis accounts, the genesis
//!   snapshot and `validate_genesis`. Pure, no simulation dependency.
//! - **Adapters Layer** (`adapters/`): `AuthModule`, the `SimulationModule`
//!   implementation, and the account store decoder.
//!
//! ## Genesis Invariants
//!
//! - Every parameter is strictly positive
//! - Account addresses are unique
//! - Every account passes its own validation predicate

pub mod adapters;
pub mod domain;

pub use adapters::{decode_store, genesis_from_map, random_params, AuthModule, MODULE_NAME, STORE_KEY};
pub use domain::account::{
    validate_coins, BaseAccount, Coin, ContinuousVestingAccount, GenesisAccount,
    ValidatableAccount,
};
pub use domain::errors::{AccountError, GenesisError};
pub use domain::genesis::{validate_genesis, GenesisState};
pub use domain::params::Params;
