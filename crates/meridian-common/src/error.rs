//! Error types for the Meridian sandbox
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using MeridianError
pub type Result<T> = std::result::Result<T, MeridianError>;

/// Unified error type for Meridian operations
#[derive(Debug, Error)]
pub enum MeridianError {
    // Ledger errors
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    // Simulation errors
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    // Audit errors
    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Currency ledger rejections
///
/// Every variant is raised before mutation: a rejected operation leaves
/// the ledger entries and the cached supply untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount {amount}: must be positive and finite")]
    InvalidAmount { amount: f64 },

    #[error("Insufficient supply: requested {requested}, supply {supply}")]
    InsufficientSupply { requested: f64, supply: f64 },
}

/// Policy simulator state-machine failures
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("No history available to restore from")]
    NoHistory,

    #[error("Ledger rejected policy: {0}")]
    Ledger(#[from] LedgerError),
}

/// Audit chain failures
///
/// Chain verification itself never errors (it reports a boolean); these
/// variants only cover export serialization.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Canonical serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MeridianError {
    fn from(err: serde_json::Error) -> Self {
        MeridianError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_display() {
        let err = LedgerError::InsufficientSupply {
            requested: 150.0,
            supply: 100.0,
        };
        assert!(err.to_string().contains("requested 150"));
        assert!(err.to_string().contains("supply 100"));
    }

    #[test]
    fn test_unified_error_from_ledger() {
        let err = MeridianError::from(LedgerError::InvalidAmount { amount: -1.0 });
        assert!(matches!(err, MeridianError::Ledger(_)));
    }

    #[test]
    fn test_simulation_error_wraps_ledger() {
        let err = SimulationError::from(LedgerError::InvalidAmount { amount: 0.0 });
        assert!(err.to_string().contains("Ledger rejected policy"));
    }
}
