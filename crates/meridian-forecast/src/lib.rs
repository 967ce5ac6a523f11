//! # Meridian Forecast
//!
//! Deterministic projection of next-period macro indicators from the
//! current state and the submitted policy.
//!
//! ## Response Formulas
//!
//! ```text
//! gdp_growth      = g₀ + s_qe·(qe − qt) + s_f·fiscal − d_r·(ir − r*)
//! inflation_delta = π₀ + s_l·(qe − qt + fiscal + cbdc) − d_π·(ir − r*)
//! unemp_delta     = −okun·(gdp_growth·100) + s_u·(ir − r*)
//! ```
//!
//! Where `r*` is the neutral rate and the coefficients live in
//! [`ForecastParams`]. Determinism is the contract: identical inputs
//! always produce bit-identical IEEE-754 outputs — no randomness, no
//! clock, no external reads. That purity is what makes sandbox scenarios
//! reproducible.

pub mod model;

pub use model::{ForecastModel, IndicatorForecast};

/// Coefficients of the rules-based macro response
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ForecastParams {
    /// Baseline GDP growth per period (g₀)
    pub base_gdp_growth: f64,
    /// GDP response to net asset purchases (s_qe)
    pub qe_gdp_sensitivity: f64,
    /// GDP response to fiscal stimulus (s_f)
    pub fiscal_gdp_sensitivity: f64,
    /// GDP drag per unit of rate above neutral (d_r)
    pub rate_gdp_drag: f64,
    /// Baseline inflation drift per period (π₀)
    pub base_inflation_drift: f64,
    /// Inflation response to injected liquidity (s_l)
    pub liquidity_inflation_sensitivity: f64,
    /// Disinflation per unit of rate above neutral (d_π)
    pub rate_disinflation: f64,
    /// Unemployment response to growth, Okun-style (okun)
    pub okun_coefficient: f64,
    /// Unemployment response to rate above neutral (s_u)
    pub rate_unemployment_sensitivity: f64,
    /// Neutral policy rate (r*)
    pub neutral_rate: f64,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            base_gdp_growth: 0.02,
            qe_gdp_sensitivity: 0.00001,
            fiscal_gdp_sensitivity: 0.00002,
            rate_gdp_drag: 0.005,
            base_inflation_drift: 0.01,
            liquidity_inflation_sensitivity: 0.000005,
            rate_disinflation: 0.002,
            okun_coefficient: 0.001,
            rate_unemployment_sensitivity: 0.002,
            neutral_rate: 0.03,
        }
    }
}
