//! # Simulation Manager - Module Aggregation and Fan-Out
//!
//! Holds the registered modules and drives each lifecycle pass over all of
//! them, merging contributions into coordinator-owned accumulators.
//!
//! ## Passes
//!
//! - **Store decoders**: every module adds entries to one shared registry
//! - **Genesis states**: every module draws from one shared randomness
//!   source and inserts its fragment into one shared genesis map
//! - **Parameter changes**: a fresh source is seeded, every module's
//!   candidates are appended in visiting order
//!
//! ## Ordering
//!
//! Modules are visited in lexicographic order of their registration name.
//! With one shared randomness source, the visiting order decides which
//! module draws which values, so a pinned order is what makes a whole
//! genesis fixture reproducible for a given seed.
//!
//! ```text
//!   seed ──→ StdRng ──→ [auth] ──→ [bank] ──→ [staking] ──→ accumulator
//!                        draws      draws       draws
//! ```
//!
//! ## Failure
//!
//! Fail-fast: the first module error stops the pass and is returned with the
//! module's registration name. Contributions merged before the failure are
//! kept.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use shared_types::{DynSimulationModule, GenesisStateMap, ParamChange, StoreDecoderRegistry};
use tracing::{debug, info, warn};

use crate::errors::SimulationError;

/// Coordinator for a fixed set of simulation modules.
pub struct SimulationManager {
    /// Registered modules by name. Fixed at construction.
    modules: BTreeMap<String, DynSimulationModule>,
    /// Decoders contributed by the modules.
    store_decoders: StoreDecoderRegistry,
    /// Parameter-change candidates, in generation order.
    param_changes: Vec<ParamChange>,
}

impl SimulationManager {
    /// Create a manager over a name → module mapping.
    pub fn new(modules: BTreeMap<String, DynSimulationModule>) -> Self {
        info!(
            "[SimManager] Created with {} modules: {:?}",
            modules.len(),
            modules.keys().collect::<Vec<_>>()
        );

        Self {
            modules,
            store_decoders: StoreDecoderRegistry::new(),
            param_changes: Vec::new(),
        }
    }

    /// Create a manager keyed by each module's own name.
    ///
    /// Fails if two modules report the same name.
    pub fn from_modules<I>(modules: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = DynSimulationModule>,
    {
        let mut map = BTreeMap::new();
        for module in modules {
            let name = module.name().to_string();
            if map.contains_key(&name) {
                return Err(SimulationError::DuplicateModule(name));
            }
            map.insert(name, module);
        }
        Ok(Self::new(map))
    }

    /// Registered module names, in visiting order.
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module is registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Let every module contribute its store decoders.
    ///
    /// Calling this twice applies every contribution twice; with
    /// last-write-wins entries that only replaces decoders with themselves.
    pub fn register_store_decoders(&mut self) {
        for (name, module) in &self.modules {
            let before = self.store_decoders.len();
            module.register_store_decoder(&mut self.store_decoders);
            debug!(
                module = %name,
                added = self.store_decoders.len().saturating_sub(before),
                "[SimManager] Store decoders registered"
            );
        }

        info!(
            "[SimManager] Store decoder registry holds {} namespaces",
            self.store_decoders.len()
        );
    }

    /// Let every module generate its randomized genesis fragment.
    ///
    /// All modules share `rng` and `genesis`; the draw order follows the
    /// visiting order.
    pub fn generate_genesis_states(
        &self,
        rng: &mut dyn RngCore,
        genesis: &mut GenesisStateMap,
    ) -> Result<(), SimulationError> {
        info!(
            "[SimManager] Generating genesis states for {} modules",
            self.modules.len()
        );

        for (name, module) in &self.modules {
            if let Err(source) = module.generate_genesis_state(rng, genesis) {
                warn!("[SimManager] ✗ Genesis generation failed in {}: {}", name, source);
                return Err(SimulationError::Module {
                    module: name.clone(),
                    source,
                });
            }
            debug!(module = %name, "[SimManager] ✓ Genesis state generated");
        }

        Ok(())
    }

    /// Generate a complete genesis map from `seed`.
    ///
    /// Equal seeds over equal module sets give equal maps.
    pub fn simulate_genesis(&self, seed: u64) -> Result<GenesisStateMap, SimulationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut genesis = GenesisStateMap::new();
        self.generate_genesis_states(&mut rng, &mut genesis)?;
        Ok(genesis)
    }

    /// Seed a fresh randomness source and append every module's randomized
    /// parameter-change candidates.
    ///
    /// Additive: repeated calls accumulate.
    pub fn randomized_param_changes(&mut self, seed: u64) -> Result<(), SimulationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let before = self.param_changes.len();

        for (name, module) in &self.modules {
            let changes = match module.randomized_params(&mut rng) {
                Ok(changes) => changes,
                Err(source) => {
                    warn!(
                        "[SimManager] ✗ Parameter change generation failed in {}: {}",
                        name, source
                    );
                    return Err(SimulationError::Module {
                        module: name.clone(),
                        source,
                    });
                }
            };

            debug!(
                module = %name,
                count = changes.len(),
                "[SimManager] Parameter changes generated"
            );
            self.param_changes.extend(changes);
        }

        info!(
            seed,
            added = self.param_changes.len() - before,
            total = self.param_changes.len(),
            "[SimManager] Randomized parameter changes generated"
        );
        Ok(())
    }

    /// The accumulated store-decoder registry.
    pub fn store_decoders(&self) -> &StoreDecoderRegistry {
        &self.store_decoders
    }

    /// The accumulated parameter-change candidates.
    pub fn param_changes(&self) -> &[ParamChange] {
        &self.param_changes
    }

    /// Move the accumulated candidates out, leaving the list empty.
    pub fn take_param_changes(&mut self) -> Vec<ParamChange> {
        std::mem::take(&mut self.param_changes)
    }
}

impl std::fmt::Debug for SimulationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationManager")
            .field("modules", &self.module_names())
            .field("store_decoders", &self.store_decoders)
            .field("param_changes", &self.param_changes.len())
            .finish()
    }
}
