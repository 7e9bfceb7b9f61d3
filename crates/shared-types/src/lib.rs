//! # Shared Types Crate
//!
//! The capability interface every simulation module implements, and the
//! accumulator types the coordinator merges module contributions into.
//!
//! ## Design Principles
//!
//! - **Narrow contract**: the coordinator depends only on `SimulationModule`,
//!   never on a concrete module type.
//! - **Explicit randomness**: the randomness source is threaded through every
//!   call as `&mut dyn RngCore`; modules own no hidden generators.
//! - **Opaque fragments**: genesis fragments are `serde_json::Value`s that
//!   only their owning module parses.

pub mod decoder_registry;
pub mod entities;
pub mod errors;
pub mod module_trait;

pub use decoder_registry::{StoreDecoder, StoreDecoderRegistry};
pub use entities::*;
pub use errors::*;
pub use module_trait::{DynSimulationModule, SimulationModule};
