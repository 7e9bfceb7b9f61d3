//! # Simulation Coordinator
//!
//! Aggregates independently developed modules and drives them through the
//! simulation lifecycle.
//!
//! ## Modular Structure
//!
//! - `manager` - `SimulationManager`, the fan-out coordinator
//! - `runner` - host bootstrap sequence: generate, validate, export
//! - `config` - environment-driven configuration
//! - `telemetry` - tracing subscriber setup
//! - `errors` - coordinator and configuration errors
//!
//! ## Determinism
//!
//! For a fixed seed and a fixed module set, genesis maps and
//! parameter-change lists are identical across runs: modules are visited in
//! lexicographic name order and all draws come from one seeded `StdRng`.

pub mod config;
pub mod errors;
pub mod manager;
pub mod runner;
pub mod telemetry;

pub use config::SimulationConfig;
pub use errors::{ConfigError, SimulationError};
pub use manager::SimulationManager;
pub use runner::{run, run_with, write_genesis, SimulationOutput};
pub use telemetry::init_tracing;
