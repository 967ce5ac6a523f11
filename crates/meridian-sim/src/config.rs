//! Sandbox configuration
//!
//! Convenience layer for hosts embedding the simulator: defaults plus
//! `MERIDIAN_*` environment overrides. Core components never read the
//! environment themselves; they take plain constructor arguments.

use anyhow::Result;
use meridian_common::EconomicState;
use serde::{Deserialize, Serialize};

/// Host-side sandbox settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Starting economy for new simulator instances
    pub initial_state: EconomicState,
    /// Ledger amount above which entries are flagged as anomalous
    pub anomaly_threshold: f64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            initial_state: EconomicState::default(),
            anomaly_threshold: meridian_ledger::DEFAULT_ANOMALY_THRESHOLD,
        }
    }
}

impl SandboxConfig {
    /// Load configuration from the environment
    ///
    /// Reads an optional `.env` file, then applies `MERIDIAN_`-prefixed
    /// overrides on top of the defaults.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(val) = std::env::var("MERIDIAN_ANOMALY_THRESHOLD") {
            if let Ok(v) = val.parse() {
                cfg.anomaly_threshold = v;
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_INITIAL_INTEREST_RATE") {
            if let Ok(v) = val.parse() {
                cfg.initial_state.interest_rate = v;
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_INITIAL_RESERVE_REQUIREMENT") {
            if let Ok(v) = val.parse() {
                cfg.initial_state.reserve_requirement = v;
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_INITIAL_GDP") {
            if let Ok(v) = val.parse() {
                cfg.initial_state.gdp = v;
            }
        }

        Ok(cfg)
    }
}
