//! Ledger entry variants
//!
//! Entries are immutable once appended; the ledger only ever clones them
//! out to callers.

use serde::{Deserialize, Serialize};

/// One journal entry in the currency ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LedgerEntry {
    /// New CBDC units created, adding to supply
    Issue { amount: f64 },

    /// CBDC units destroyed, subtracting from supply
    Burn { amount: f64 },

    /// Movement between named accounts; supply-neutral, journal-only
    Transfer {
        from: String,
        to: String,
        amount: f64,
    },
}

impl LedgerEntry {
    /// The amount carried by this entry, regardless of variant
    #[inline]
    pub fn amount(&self) -> f64 {
        match self {
            LedgerEntry::Issue { amount }
            | LedgerEntry::Burn { amount }
            | LedgerEntry::Transfer { amount, .. } => *amount,
        }
    }

    /// Signed contribution of this entry to the supply fold
    #[inline]
    pub fn supply_delta(&self) -> f64 {
        match self {
            LedgerEntry::Issue { amount } => *amount,
            LedgerEntry::Burn { amount } => -amount,
            LedgerEntry::Transfer { .. } => 0.0,
        }
    }
}
