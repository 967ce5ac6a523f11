//! Forecast model - pure (state, policy) → indicators mapping

use meridian_common::{EconomicState, Policy};
use serde::{Deserialize, Serialize};

use crate::ForecastParams;

/// Projected next-period indicators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorForecast {
    pub gdp: f64,
    pub inflation: f64,
    pub unemployment: f64,
}

impl IndicatorForecast {
    /// Overwrite the forecastable indicators on a state
    pub fn apply_to(&self, state: &mut EconomicState) {
        state.gdp = self.gdp;
        state.inflation = self.inflation;
        state.unemployment = self.unemployment;
    }
}

/// Deterministic rules-based forecaster
///
/// Holds only coefficients; `forecast` has no side effects and reads
/// nothing but its arguments.
#[derive(Debug, Clone, Default)]
pub struct ForecastModel {
    params: ForecastParams,
}

impl ForecastModel {
    /// Forecaster with the default coefficient set
    pub fn new() -> Self {
        Self::default()
    }

    /// Forecaster with custom coefficients
    pub fn with_params(params: ForecastParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ForecastParams {
        &self.params
    }

    /// Project next-period GDP, inflation, and unemployment
    ///
    /// `state.interest_rate` is read as already updated by the policy
    /// under evaluation; absent policy fields contribute zero.
    pub fn forecast(&self, state: &EconomicState, policy: &Policy) -> IndicatorForecast {
        let p = &self.params;

        let qe = policy.qe.unwrap_or(0.0);
        let qt = policy.qt.unwrap_or(0.0);
        let fiscal = policy.fiscal_stimulus.unwrap_or(0.0);
        let cbdc = policy.cbdc_issuance.unwrap_or(0.0);
        let rate_gap = state.interest_rate - p.neutral_rate;

        let gdp_growth = p.base_gdp_growth + p.qe_gdp_sensitivity * (qe - qt)
            + p.fiscal_gdp_sensitivity * fiscal
            - p.rate_gdp_drag * rate_gap;

        let liquidity = qe - qt + fiscal + cbdc;
        let inflation_delta = p.base_inflation_drift
            + p.liquidity_inflation_sensitivity * liquidity
            - p.rate_disinflation * rate_gap;

        let unemp_delta =
            -p.okun_coefficient * (gdp_growth * 100.0) + p.rate_unemployment_sensitivity * rate_gap;

        IndicatorForecast {
            gdp: state.gdp * (1.0 + gdp_growth),
            inflation: (state.inflation + inflation_delta).max(0.0),
            unemployment: (state.unemployment + unemp_delta).max(0.0),
        }
    }
}
