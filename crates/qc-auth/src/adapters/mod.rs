//! Adapters connecting the auth domain to the simulation interface.

pub mod decoder;
pub mod simulation;

pub use decoder::{decode_store, STORE_KEY};
pub use simulation::{genesis_from_map, random_params, AuthModule, MODULE_NAME};
