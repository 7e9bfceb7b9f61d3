//! # Simulation Bootstrap Runner
//!
//! The host-side sequence around the coordinator:
//!
//! 1. Wire the modules into a `SimulationManager`
//! 2. Register store decoders
//! 3. Generate the genesis map from the configured seed
//! 4. Generate randomized parameter changes from the same seed
//! 5. Validate the auth fragment before handing the genesis out
//!
//! Any failure aborts the run; nothing is retried.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use qc_auth::{genesis_from_map, AuthModule, GenesisState};
use shared_types::{DynSimulationModule, GenesisStateMap, ParamChange};
use tracing::info;

use crate::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::manager::SimulationManager;

/// Everything a bootstrap run produces.
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    /// Full genesis map, one fragment per module.
    pub genesis: GenesisStateMap,
    /// The validated auth fragment.
    pub auth_genesis: GenesisState,
    /// Randomized parameter-change candidates.
    pub param_changes: Vec<ParamChange>,
    /// Namespaces with a registered store decoder.
    pub decoder_namespaces: Vec<String>,
}

/// Modules wired into a bootstrap run for `config`.
pub fn default_modules(config: &SimulationConfig) -> Vec<DynSimulationModule> {
    let auth: DynSimulationModule =
        Arc::new(AuthModule::new(config.num_accounts, config.initial_stake));
    vec![auth]
}

/// Run the bootstrap sequence over the default modules.
pub fn run(config: &SimulationConfig) -> Result<SimulationOutput, SimulationError> {
    let manager = SimulationManager::from_modules(default_modules(config))?;
    run_with(manager, config.seed)
}

/// Run the bootstrap sequence over an already wired manager.
pub fn run_with(
    mut manager: SimulationManager,
    seed: u64,
) -> Result<SimulationOutput, SimulationError> {
    info!("[Runner] Starting simulation bootstrap (seed {})", seed);

    manager.register_store_decoders();
    let genesis = manager.simulate_genesis(seed)?;
    manager.randomized_param_changes(seed)?;

    let auth_genesis = genesis_from_map(&genesis)?;
    auth_genesis.validate()?;

    info!(
        modules = manager.len(),
        accounts = auth_genesis.accounts.len(),
        param_changes = manager.param_changes().len(),
        "[Runner] ✓ Genesis generated and validated"
    );

    Ok(SimulationOutput {
        decoder_namespaces: manager
            .store_decoders()
            .namespaces()
            .into_iter()
            .map(String::from)
            .collect(),
        param_changes: manager.take_param_changes(),
        genesis,
        auth_genesis,
    })
}

/// Render the genesis map as pretty-printed JSON.
pub fn genesis_to_json(genesis: &GenesisStateMap) -> Result<String, SimulationError> {
    Ok(serde_json::to_string_pretty(genesis)?)
}

/// Write the genesis map to `path` as pretty-printed JSON.
pub fn write_genesis(path: &Path, genesis: &GenesisStateMap) -> Result<(), SimulationError> {
    let json = genesis_to_json(genesis)?;
    fs::write(path, json)?;
    info!("[Runner] Genesis written to {}", path.display());
    Ok(())
}
