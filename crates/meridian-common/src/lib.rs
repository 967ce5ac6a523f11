//! # Meridian Common
//!
//! Shared types and errors for the Meridian economic policy sandbox.
//!
//! ## Core Types
//!
//! - [`EconomicState`]: the mutable macro/currency state owned by a simulator
//! - [`Policy`]: a sparse monetary/fiscal action submitted to the simulator
//!
//! ## Errors
//!
//! - [`MeridianError`]: unified error with domain variants
//! - [`LedgerError`]: currency ledger rejections (invalid amount, supply)
//! - [`SimulationError`]: simulator state-machine failures
//! - [`AuditError`]: audit chain serialization failures

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AuditError, LedgerError, MeridianError, Result, SimulationError};
pub use types::{economic_state::EconomicState, policy::Policy};

/// Meridian version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
