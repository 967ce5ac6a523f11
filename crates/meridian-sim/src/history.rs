//! History records
//!
//! One record per `apply_policy` call. The `result` is a deep copy taken
//! at append time, never an alias of the live state.

use meridian_common::{EconomicState, Policy};
use serde::{Deserialize, Serialize};

/// An applied policy and the state it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub policy: Policy,
    pub result: EconomicState,
}

impl std::fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Applied {}, resulting in {}", self.policy, self.result)
    }
}
