//! Domain module for Auth
//!
//! Parameters, genesis accounts, the genesis snapshot and its validation.
//! No dependency on the simulation interface.

pub mod account;
pub mod errors;
pub mod genesis;
pub mod params;

pub use account::*;
pub use errors::*;
pub use genesis::*;
pub use params::*;
