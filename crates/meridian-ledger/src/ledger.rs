//! Currency ledger with a cached supply invariant
//!
//! Validation happens before any mutation: a rejected `issue` or `burn`
//! leaves both the entry sequence and the cached supply exactly as they
//! were. Mutating calls take `&mut self`, so a shared instance must be
//! wrapped in a single-writer lock by the caller.

use meridian_common::LedgerError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entry::LedgerEntry;

/// Append-only CBDC ledger
///
/// `supply` is a cache of the fold over `entries`; the two always agree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyLedger {
    entries: Vec<LedgerEntry>,
    supply: f64,
}

impl CurrencyLedger {
    /// Create an empty ledger with zero supply
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue new CBDC units
    ///
    /// Rejects non-positive or non-finite amounts with
    /// [`LedgerError::InvalidAmount`] before touching the journal.
    pub fn issue(&mut self, amount: f64) -> Result<(), LedgerError> {
        validate_amount(amount)?;

        self.entries.push(LedgerEntry::Issue { amount });
        self.supply += amount;
        debug!(amount, supply = self.supply, "CBDC issued");
        Ok(())
    }

    /// Burn CBDC units out of circulation
    ///
    /// Rejects amounts exceeding the current supply with
    /// [`LedgerError::InsufficientSupply`]; supply never goes negative.
    pub fn burn(&mut self, amount: f64) -> Result<(), LedgerError> {
        validate_amount(amount)?;

        if amount > self.supply {
            return Err(LedgerError::InsufficientSupply {
                requested: amount,
                supply: self.supply,
            });
        }

        self.entries.push(LedgerEntry::Burn { amount });
        self.supply -= amount;
        debug!(amount, supply = self.supply, "CBDC burned");
        Ok(())
    }

    /// Record a transfer between named accounts
    ///
    /// Journal-only: no per-account balance exists here, so nothing is
    /// checked or moved beyond appending the entry. Supply is unchanged.
    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<(), LedgerError> {
        validate_amount(amount)?;

        self.entries.push(LedgerEntry::Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        });
        debug!(from, to, amount, "CBDC transfer recorded");
        Ok(())
    }

    /// Current supply, O(1) from the cache
    #[inline]
    pub fn supply(&self) -> f64 {
        self.supply
    }

    /// Supply recomputed as the fold over all entries
    ///
    /// Must always equal [`supply`](Self::supply); exposed so callers and
    /// tests can check the invariant.
    pub fn recompute_supply(&self) -> f64 {
        self.entries.iter().map(LedgerEntry::supply_delta).sum()
    }

    /// Total units ever issued
    pub fn total_issued(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| matches!(e, LedgerEntry::Issue { .. }))
            .map(LedgerEntry::amount)
            .sum()
    }

    /// Total units ever burned
    pub fn total_burned(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| matches!(e, LedgerEntry::Burn { .. }))
            .map(LedgerEntry::amount)
            .sum()
    }

    /// Entries whose amount exceeds `threshold`, in insertion order
    ///
    /// Pure read used by compliance collaborators; flagged entries are
    /// clones, the journal is not touched.
    pub fn detect_anomalies(&self, threshold: f64) -> Vec<LedgerEntry> {
        let flagged: Vec<LedgerEntry> = self
            .entries
            .iter()
            .filter(|e| e.amount() > threshold)
            .cloned()
            .collect();

        if !flagged.is_empty() {
            warn!(count = flagged.len(), threshold, "Ledger anomalies flagged");
        }
        flagged
    }

    /// Snapshot of the full entry sequence, in insertion order
    pub fn get_ledger(&self) -> Vec<LedgerEntry> {
        self.entries.clone()
    }

    /// Number of journal entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry has been appended yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared validation boundary for issue/burn/transfer amounts
fn validate_amount(amount: f64) -> Result<(), LedgerError> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(LedgerError::InvalidAmount { amount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_increases_supply() {
        let mut ledger = CurrencyLedger::new();
        ledger.issue(1_000_000.0).unwrap();
        assert_eq!(ledger.supply(), 1_000_000.0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_issue_rejects_non_positive() {
        let mut ledger = CurrencyLedger::new();

        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = ledger.issue(amount);
            assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        }
        assert!(ledger.is_empty());
        assert_eq!(ledger.supply(), 0.0);
    }

    #[test]
    fn test_burn_rejects_overdraft_and_leaves_supply() {
        let mut ledger = CurrencyLedger::new();
        ledger.issue(100.0).unwrap();

        let result = ledger.burn(150.0);
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientSupply {
                requested,
                supply,
            }) if requested == 150.0 && supply == 100.0
        ));

        // Rejected burn is not observable anywhere
        assert_eq!(ledger.supply(), 100.0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_transfer_is_supply_neutral() {
        let mut ledger = CurrencyLedger::new();
        ledger.issue(1_000.0).unwrap();
        ledger.transfer("central_bank", "bank_A", 400.0).unwrap();

        assert_eq!(ledger.supply(), 1_000.0);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_transfer_rejects_non_positive() {
        let mut ledger = CurrencyLedger::new();
        let result = ledger.transfer("a", "b", -1.0);
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_supply_matches_fold() {
        let mut ledger = CurrencyLedger::new();
        ledger.issue(500.0).unwrap();
        ledger.burn(120.0).unwrap();
        ledger.transfer("a", "b", 60.0).unwrap();
        ledger.issue(30.0).unwrap();

        assert_eq!(ledger.supply(), ledger.recompute_supply());
        assert_eq!(ledger.total_issued(), 530.0);
        assert_eq!(ledger.total_burned(), 120.0);
    }

    #[test]
    fn test_detect_anomalies_filters_by_threshold() {
        let mut ledger = CurrencyLedger::new();
        ledger.issue(10.0).unwrap();
        ledger.issue(5_000.0).unwrap();
        ledger.transfer("a", "b", 9_000.0).unwrap();

        let flagged = ledger.detect_anomalies(1_000.0);
        assert_eq!(flagged.len(), 2);
        assert_eq!(flagged[0], LedgerEntry::Issue { amount: 5_000.0 });
        assert!(matches!(flagged[1], LedgerEntry::Transfer { .. }));

        // Scan is pure
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_get_ledger_is_a_snapshot() {
        let mut ledger = CurrencyLedger::new();
        ledger.issue(1.0).unwrap();

        let mut snapshot = ledger.get_ledger();
        snapshot.clear();
        assert_eq!(ledger.len(), 1);
    }
}
