//! EconomicState - the macro/currency state owned by a policy simulator
//!
//! One simulator instance exclusively owns one state; every mutation goes
//! through `apply_policy`. Snapshots handed out to history or callers are
//! deep copies, never aliases of the live state.

use serde::{Deserialize, Serialize};

/// Macro and currency state for one sandbox instance
///
/// All quantities are IEEE-754 doubles: rates and shares are fractions
/// (0.05 = 5%), asset and flow figures are currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicState {
    /// Central bank policy rate (fraction)
    pub interest_rate: f64,

    /// Commercial bank reserve requirement (fraction)
    pub reserve_requirement: f64,

    /// Central bank balance sheet assets
    pub central_bank_assets: f64,

    /// Government spending level
    pub gov_spending: f64,

    /// Outstanding CBDC supply
    pub cbdc_supply: f64,

    /// Gross domestic product
    pub gdp: f64,

    /// Inflation rate (fraction, floored at zero)
    pub inflation: f64,

    /// Unemployment rate (fraction, floored at zero)
    pub unemployment: f64,
}

impl Default for EconomicState {
    /// Baseline sandbox economy: 5% policy rate, 10% reserve requirement,
    /// a 1B balance sheet and GDP, no CBDC issued yet.
    fn default() -> Self {
        Self {
            interest_rate: 0.05,
            reserve_requirement: 0.1,
            central_bank_assets: 1_000_000_000.0,
            gov_spending: 500_000_000.0,
            cbdc_supply: 0.0,
            gdp: 1_000_000_000.0,
            inflation: 0.02,
            unemployment: 0.05,
        }
    }
}

impl EconomicState {
    /// Deep-copy snapshot, detached from the live state
    #[inline]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl std::fmt::Display for EconomicState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EconomicState(rate={:.4}, reserves={:.4}, gdp={:.0}, inflation={:.4}, unemployment={:.4}, cbdc={:.0})",
            self.interest_rate,
            self.reserve_requirement,
            self.gdp,
            self.inflation,
            self.unemployment,
            self.cbdc_supply,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baseline() {
        let state = EconomicState::default();
        assert_eq!(state.interest_rate, 0.05);
        assert_eq!(state.cbdc_supply, 0.0);
        assert_eq!(state.gdp, 1_000_000_000.0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = EconomicState::default();
        let snap = state.snapshot();

        state.interest_rate = 0.01;
        assert_eq!(snap.interest_rate, 0.05);
    }

    #[test]
    fn test_serde_round_trip() {
        let state = EconomicState::default();
        let json = serde_json::to_string(&state).unwrap();
        let back: EconomicState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
