//! # Simulation Module Trait - Capability Contract
//!
//! Defines the contract every module implements to take part in the
//! simulation lifecycle driven by the coordinator.
//!
//! ## Capabilities
//!
//! - **Store decoders**: render raw store entries for inspection tooling
//! - **Genesis state**: produce a randomized, seed-reproducible state fragment
//! - **Parameter changes**: produce randomized parameter-change candidates
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! use shared_types::{GenesisStateMap, ModuleError, SimulationModule};
//! use rand::RngCore;
//!
//! pub struct BankModule;
//!
//! impl SimulationModule for BankModule {
//!     fn name(&self) -> &'static str { "bank" }
//!
//!     fn generate_genesis_state(
//!         &self,
//!         rng: &mut dyn RngCore,
//!         genesis: &mut GenesisStateMap,
//!     ) -> Result<(), ModuleError> {
//!         genesis.insert(self.name().to_string(), serde_json::json!({ "supply": rng.next_u32() }));
//!         Ok(())
//!     }
//! }
//! ```

use rand::RngCore;

use crate::decoder_registry::StoreDecoderRegistry;
use crate::entities::{GenesisStateMap, ParamChange};
use crate::errors::ModuleError;

/// The trait every simulation module implements.
///
/// Implementations must not keep mutable state shared with other modules,
/// and must not depend on the order in which the coordinator visits them.
pub trait SimulationModule: Send + Sync {
    /// The module's own name. Used as its key in the genesis map.
    fn name(&self) -> &'static str;

    /// Insert zero or more namespace → decoder entries.
    ///
    /// Default implementation contributes nothing.
    fn register_store_decoder(&self, _registry: &mut StoreDecoderRegistry) {}

    /// Produce this module's randomized genesis fragment and insert it under
    /// [`SimulationModule::name`].
    ///
    /// Must be deterministic for a fixed state of `rng`. Fragments of other
    /// modules already in `genesis` may be read but never modified.
    fn generate_genesis_state(
        &self,
        rng: &mut dyn RngCore,
        genesis: &mut GenesisStateMap,
    ) -> Result<(), ModuleError>;

    /// Produce randomized parameter-change candidates.
    ///
    /// Pure function of the module identity and the state of `rng`.
    /// Default implementation produces none.
    fn randomized_params(&self, _rng: &mut dyn RngCore) -> Result<Vec<ParamChange>, ModuleError> {
        Ok(Vec::new())
    }
}

/// A shared, type-erased module handle.
///
/// The same handle may be registered under several names.
pub type DynSimulationModule = std::sync::Arc<dyn SimulationModule>;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct MinimalModule;

    impl SimulationModule for MinimalModule {
        fn name(&self) -> &'static str {
            "minimal"
        }

        fn generate_genesis_state(
            &self,
            rng: &mut dyn RngCore,
            genesis: &mut GenesisStateMap,
        ) -> Result<(), ModuleError> {
            genesis.insert(
                self.name().to_string(),
                serde_json::json!({ "value": rng.next_u32() }),
            );
            Ok(())
        }
    }

    #[test]
    fn test_default_capabilities_are_noops() {
        let module = MinimalModule;
        let mut registry = StoreDecoderRegistry::new();
        let mut rng = StdRng::seed_from_u64(42);

        module.register_store_decoder(&mut registry);
        assert!(registry.is_empty());
        assert!(module.randomized_params(&mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_genesis_keyed_by_own_name() {
        let module = MinimalModule;
        let mut genesis = GenesisStateMap::new();
        let mut rng = StdRng::seed_from_u64(42);

        module.generate_genesis_state(&mut rng, &mut genesis).unwrap();
        assert!(genesis.contains_key("minimal"));
    }
}
