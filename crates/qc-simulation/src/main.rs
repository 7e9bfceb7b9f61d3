//! # Quantum-Chain Simulation Bootstrap
//!
//! Generates a randomized, seed-reproducible genesis, validates it and
//! writes it out.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Initialize tracing
//! 3. Run the bootstrap: decoders, genesis, parameter changes, validation
//! 4. Write the genesis to `QC_SIM_GENESIS_OUT` or stdout

use anyhow::{Context, Result};
use tracing::info;

use qc_simulation::runner::genesis_to_json;
use qc_simulation::{init_tracing, run, write_genesis, SimulationConfig};

fn main() -> Result<()> {
    let config = SimulationConfig::from_env().context("Failed to load simulation config")?;
    config.validate().context("Invalid simulation config")?;

    init_tracing(&config);

    info!("===========================================");
    info!("  Quantum-Chain Simulation v{}", env!("CARGO_PKG_VERSION"));
    info!("  Seed: {}", config.seed);
    info!("===========================================");

    let output = run(&config).context("Simulation bootstrap failed")?;

    match &config.genesis_out {
        Some(path) => write_genesis(path, &output.genesis)
            .with_context(|| format!("Failed to write genesis to {}", path.display()))?,
        None => println!("{}", genesis_to_json(&output.genesis)?),
    }

    info!(
        "Generated {} parameter change candidates, decoders for {:?}",
        output.param_changes.len(),
        output.decoder_namespaces
    );

    Ok(())
}
