//! Simulation configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Configuration for a simulation bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Top-level seed for genesis and parameter-change generation.
    pub seed: u64,

    /// Number of accounts the auth module generates.
    pub num_accounts: usize,

    /// Upper bound of each generated account's stake balance.
    pub initial_stake: u64,

    /// Log level filter (trace, debug, info, warn, error, or a directive list)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Where to write the genesis document. Stdout when unset.
    pub genesis_out: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            num_accounts: 10,
            initial_stake: 1_000_000,
            log_level: "info".to_string(),
            json_logs: false,
            genesis_out: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_SIM_SEED`: Top-level seed (default: 42)
    /// - `QC_SIM_NUM_ACCOUNTS`: Generated accounts (default: 10)
    /// - `QC_SIM_INITIAL_STAKE`: Max stake per account (default: 1000000)
    /// - `QC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `QC_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `QC_SIM_GENESIS_OUT`: Genesis output path (default: stdout)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            seed: parse_or(&lookup, "QC_SIM_SEED", defaults.seed)?,
            num_accounts: parse_or(&lookup, "QC_SIM_NUM_ACCOUNTS", defaults.num_accounts)?,
            initial_stake: parse_or(&lookup, "QC_SIM_INITIAL_STAKE", defaults.initial_stake)?,
            log_level: lookup("QC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            json_logs: lookup("QC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
            genesis_out: lookup("QC_SIM_GENESIS_OUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Validate value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_accounts == 0 {
            return Err(ConfigError::OutOfRange(
                "num_accounts must be at least 1".to_string(),
            ));
        }
        if self.initial_stake == 0 {
            return Err(ConfigError::OutOfRange(
                "initial_stake must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
