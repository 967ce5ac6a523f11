//! Policy - a sparse monetary/fiscal action
//!
//! A policy sets only the instruments it touches; absent fields leave the
//! corresponding state untouched. Policies are immutable once submitted:
//! the simulator clones them into history rather than holding references.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recognized policy keys, in the order instruments are applied
pub const POLICY_KEYS: [&str; 6] = [
    "interest_rate",
    "reserve_requirement",
    "qe",
    "qt",
    "fiscal_stimulus",
    "cbdc_issuance",
];

/// Sparse monetary/fiscal policy action
///
/// - `interest_rate` / `reserve_requirement` overwrite the state value
/// - `qe` / `qt` add to / subtract from central bank assets
/// - `fiscal_stimulus` adds to government spending
/// - `cbdc_issuance` issues on the currency ledger and adds to CBDC supply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_requirement: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qe: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qt: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_stimulus: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cbdc_issuance: Option<f64>,
}

impl Policy {
    /// Create an empty (no-op) policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy rate (overwrites state)
    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    /// Set the reserve requirement (overwrites state)
    pub fn with_reserve_requirement(mut self, requirement: f64) -> Self {
        self.reserve_requirement = Some(requirement);
        self
    }

    /// Quantitative easing: asset purchases added to the balance sheet
    pub fn with_qe(mut self, amount: f64) -> Self {
        self.qe = Some(amount);
        self
    }

    /// Quantitative tightening: asset runoff subtracted from the balance sheet
    pub fn with_qt(mut self, amount: f64) -> Self {
        self.qt = Some(amount);
        self
    }

    /// Fiscal stimulus added to government spending
    pub fn with_fiscal_stimulus(mut self, amount: f64) -> Self {
        self.fiscal_stimulus = Some(amount);
        self
    }

    /// CBDC issuance: recorded on the ledger and added to CBDC supply
    pub fn with_cbdc_issuance(mut self, amount: f64) -> Self {
        self.cbdc_issuance = Some(amount);
        self
    }

    /// True when no instrument is set
    pub fn is_empty(&self) -> bool {
        self.interest_rate.is_none()
            && self.reserve_requirement.is_none()
            && self.qe.is_none()
            && self.qt.is_none()
            && self.fiscal_stimulus.is_none()
            && self.cbdc_issuance.is_none()
    }

    /// Build a policy from a loose key/value map
    ///
    /// Unrecognized keys are not an error: they are returned to the caller
    /// so the submission boundary can make them observable (warning,
    /// counter) without rejecting the action.
    pub fn from_map(map: &BTreeMap<String, f64>) -> (Self, Vec<String>) {
        let mut policy = Self::new();
        let mut unknown = Vec::new();

        for (key, value) in map {
            match key.as_str() {
                "interest_rate" => policy.interest_rate = Some(*value),
                "reserve_requirement" => policy.reserve_requirement = Some(*value),
                "qe" => policy.qe = Some(*value),
                "qt" => policy.qt = Some(*value),
                "fiscal_stimulus" => policy.fiscal_stimulus = Some(*value),
                "cbdc_issuance" => policy.cbdc_issuance = Some(*value),
                _ => unknown.push(key.clone()),
            }
        }

        (policy, unknown)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(v) = self.interest_rate {
            parts.push(format!("interest_rate={v}"));
        }
        if let Some(v) = self.reserve_requirement {
            parts.push(format!("reserve_requirement={v}"));
        }
        if let Some(v) = self.qe {
            parts.push(format!("qe={v}"));
        }
        if let Some(v) = self.qt {
            parts.push(format!("qt={v}"));
        }
        if let Some(v) = self.fiscal_stimulus {
            parts.push(format!("fiscal_stimulus={v}"));
        }
        if let Some(v) = self.cbdc_issuance {
            parts.push(format!("cbdc_issuance={v}"));
        }

        if parts.is_empty() {
            write!(f, "Policy(no-op)")
        } else {
            write!(f, "Policy({})", parts.join(", "))
        }
    }
}
