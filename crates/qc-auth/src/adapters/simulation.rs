//! # Auth Simulation Module
//!
//! Plugs the auth module into the simulation coordinator: randomized
//! genesis, randomized parameter changes and the account store decoder.

use rand::{Rng, RngCore};
use shared_types::{
    random_accounts, GenesisStateMap, ModuleError, ParamChange, SimulationModule,
    StoreDecoderRegistry,
};
use tracing::debug;

use super::decoder::{decode_store, STORE_KEY};
use crate::domain::{
    BaseAccount, Coin, GenesisAccount, GenesisError, GenesisState, Params,
    KEY_MAX_MEMO_CHARACTERS, KEY_TX_SIG_LIMIT, KEY_TX_SIZE_COST_PER_BYTE,
};

/// Module name, also the key of the auth fragment in the genesis map.
pub const MODULE_NAME: &str = "auth";

/// Denomination of the simulated accounts' initial balance.
pub const STAKE_DENOM: &str = "stake";

/// Random `max_memo_characters` in [100, 200).
pub fn gen_max_memo_chars(rng: &mut dyn RngCore) -> u64 {
    rng.gen_range(100..200)
}

/// Random `tx_sig_limit` in [5, 12).
pub fn gen_tx_sig_limit(rng: &mut dyn RngCore) -> u64 {
    rng.gen_range(5..12)
}

/// Random `tx_size_cost_per_byte` in [5, 15).
pub fn gen_tx_size_cost_per_byte(rng: &mut dyn RngCore) -> u64 {
    rng.gen_range(5..15)
}

/// Random `sig_verify_cost_ed25519` in [500, 1000).
pub fn gen_sig_verify_cost_ed25519(rng: &mut dyn RngCore) -> u64 {
    rng.gen_range(500..1000)
}

/// Random `sig_verify_cost_secp256k1` in [500, 1000).
pub fn gen_sig_verify_cost_secp256k1(rng: &mut dyn RngCore) -> u64 {
    rng.gen_range(500..1000)
}

/// Draw a full random parameter set. Every value is strictly positive.
pub fn random_params(rng: &mut dyn RngCore) -> Params {
    Params {
        max_memo_characters: gen_max_memo_chars(rng),
        tx_sig_limit: gen_tx_sig_limit(rng),
        tx_size_cost_per_byte: gen_tx_size_cost_per_byte(rng),
        sig_verify_cost_ed25519: gen_sig_verify_cost_ed25519(rng),
        sig_verify_cost_secp256k1: gen_sig_verify_cost_secp256k1(rng),
    }
}

/// Read the auth fragment out of a genesis map.
pub fn genesis_from_map(genesis: &GenesisStateMap) -> Result<GenesisState, GenesisError> {
    let fragment = genesis
        .get(MODULE_NAME)
        .ok_or_else(|| GenesisError::MissingModule(MODULE_NAME.to_string()))?;
    GenesisState::from_value(fragment.clone())
}

/// The auth module as seen by the simulation coordinator.
#[derive(Debug, Clone)]
pub struct AuthModule {
    num_accounts: usize,
    initial_stake: u64,
}

impl AuthModule {
    /// Create a module generating `num_accounts` funded accounts with up to
    /// `initial_stake` of [`STAKE_DENOM`] each.
    ///
    /// Every generated account holds a non-zero balance, so an
    /// `initial_stake` of zero is raised to one.
    pub fn new(num_accounts: usize, initial_stake: u64) -> Self {
        Self {
            num_accounts,
            initial_stake: initial_stake.max(1),
        }
    }

    /// Build a random genesis state.
    pub fn random_genesis(&self, rng: &mut dyn RngCore) -> GenesisState {
        let params = random_params(rng);
        let sim_accounts = random_accounts(rng, self.num_accounts);

        let mut accounts = Vec::with_capacity(sim_accounts.len());
        for (number, sim) in sim_accounts.into_iter().enumerate() {
            let amount = rng.gen_range(1..=self.initial_stake);
            let mut account = BaseAccount::new(sim.address, number as u64)
                .with_coins(vec![Coin::new(STAKE_DENOM, amount)]);
            account.pub_key = Some(hex::encode(&sim.pub_key));
            accounts.push(GenesisAccount::Base(account));
        }

        GenesisState::new(params, accounts)
    }
}

impl Default for AuthModule {
    fn default() -> Self {
        Self::new(10, 1_000_000)
    }
}

impl SimulationModule for AuthModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn register_store_decoder(&self, registry: &mut StoreDecoderRegistry) {
        registry.register(STORE_KEY, decode_store);
    }

    fn generate_genesis_state(
        &self,
        rng: &mut dyn RngCore,
        genesis: &mut GenesisStateMap,
    ) -> Result<(), ModuleError> {
        let state = self.random_genesis(rng);
        state
            .validate()
            .map_err(|e| ModuleError::InvalidState(e.to_string()))?;

        debug!(
            accounts = state.accounts.len(),
            tx_sig_limit = state.params.tx_sig_limit,
            "[Auth] Generated randomized genesis state"
        );

        let fragment = state
            .to_value()
            .map_err(|e| ModuleError::Encoding(e.to_string()))?;
        genesis.insert(MODULE_NAME.to_string(), fragment);
        Ok(())
    }

    fn randomized_params(&self, rng: &mut dyn RngCore) -> Result<Vec<ParamChange>, ModuleError> {
        Ok(vec![
            ParamChange::new(
                MODULE_NAME,
                KEY_MAX_MEMO_CHARACTERS,
                format!("\"{}\"", gen_max_memo_chars(rng)),
            ),
            ParamChange::new(
                MODULE_NAME,
                KEY_TX_SIG_LIMIT,
                format!("\"{}\"", gen_tx_sig_limit(rng)),
            ),
            ParamChange::new(
                MODULE_NAME,
                KEY_TX_SIZE_COST_PER_BYTE,
                format!("\"{}\"", gen_tx_size_cost_per_byte(rng)),
            ),
        ])
    }
}
