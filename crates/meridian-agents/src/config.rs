//! Stress-run configuration
//!
//! Defaults plus `MERIDIAN_STRESS_*` environment overrides, for hosts
//! that want to size a run without plumbing arguments through.

use anyhow::Result;
use meridian_common::EconomicState;
use serde::{Deserialize, Serialize};

/// Settings for one multi-agent stress run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressConfig {
    /// Fleet size
    pub agents: usize,
    /// Rounds to drive
    pub steps: usize,
    /// RNG seed; a run is reproducible from this value
    pub seed: u64,
    /// Starting state copied into every agent
    pub initial_state: EconomicState,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            agents: 10,
            steps: 100,
            seed: 0,
            initial_state: EconomicState::default(),
        }
    }
}

impl StressConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(val) = std::env::var("MERIDIAN_STRESS_AGENTS") {
            if let Ok(v) = val.parse() {
                cfg.agents = v;
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_STRESS_STEPS") {
            if let Ok(v) = val.parse() {
                cfg.steps = v;
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_STRESS_SEED") {
            if let Ok(v) = val.parse() {
                cfg.seed = v;
            }
        }

        Ok(cfg)
    }
}
