//! # Meridian Ledger
//!
//! Append-only journal of CBDC issuance, burn, and transfer actions with a
//! conserved supply invariant:
//!
//! ```text
//! supply = Σ(issue amounts) − Σ(burn amounts)
//! ```
//!
//! The supply is cached for O(1) reads but is always exactly recomputable
//! from the entry sequence, and never goes negative. Transfers are journal
//! entries only: no per-account balances exist at this layer.

pub mod entry;
pub mod ledger;

pub use entry::LedgerEntry;
pub use ledger::CurrencyLedger;

/// Default flagging threshold for [`CurrencyLedger::detect_anomalies`]
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 1_000_000_000.0;
