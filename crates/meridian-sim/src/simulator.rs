//! Policy simulator - the sandbox state machine
//!
//! `apply_policy` stages every delta on a scratch copy of the state and
//! only commits after the ledger has accepted any CBDC issuance, so a
//! rejected policy leaves state, history, and ledger exactly as they
//! were.

use std::collections::BTreeMap;
use std::sync::Arc;

use meridian_audit::EventSink;
use meridian_common::{EconomicState, Policy, SimulationError};
use meridian_forecast::ForecastModel;
use meridian_ledger::CurrencyLedger;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::history::HistoryRecord;

/// State machine applying monetary/fiscal policies to one economy
pub struct PolicySimulator {
    state: EconomicState,
    history: Vec<HistoryRecord>,
    ledger: CurrencyLedger,
    model: ForecastModel,
    sink: Option<Arc<dyn EventSink>>,
    unknown_keys: u64,
}

impl PolicySimulator {
    /// Create a simulator owning `initial_state`
    pub fn new(initial_state: EconomicState) -> Self {
        info!(%initial_state, "Policy simulator initialized");
        Self {
            state: initial_state,
            history: Vec::new(),
            ledger: CurrencyLedger::new(),
            model: ForecastModel::new(),
            sink: None,
            unknown_keys: 0,
        }
    }

    /// Replace the default forecaster
    pub fn with_model(mut self, model: ForecastModel) -> Self {
        self.model = model;
        self
    }

    /// Attach an audit sink receiving every state-changing action
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Apply one policy and return the updated state snapshot
    ///
    /// Instrument application order: rate and reserve overwrites, balance
    /// sheet deltas (`qe`/`qt`), fiscal stimulus, CBDC issuance (delegated
    /// to the ledger), then the forecast overwrite of the indicators.
    pub fn apply_policy(&mut self, policy: &Policy) -> Result<EconomicState, SimulationError> {
        debug!(%policy, "Applying policy");

        let mut next = self.state.clone();

        if let Some(rate) = policy.interest_rate {
            next.interest_rate = rate;
        }
        if let Some(requirement) = policy.reserve_requirement {
            next.reserve_requirement = requirement;
        }
        if let Some(qe) = policy.qe {
            next.central_bank_assets += qe;
        }
        if let Some(qt) = policy.qt {
            next.central_bank_assets -= qt;
        }
        if let Some(stimulus) = policy.fiscal_stimulus {
            next.gov_spending += stimulus;
        }
        if let Some(issuance) = policy.cbdc_issuance {
            // The ledger validates before mutating; a rejection here
            // drops the scratch state and leaves everything untouched.
            self.ledger.issue(issuance)?;
            next.cbdc_supply += issuance;
        }

        let forecast = self.model.forecast(&next, policy);
        forecast.apply_to(&mut next);

        self.state = next;
        self.history.push(HistoryRecord {
            policy: policy.clone(),
            result: self.state.snapshot(),
        });

        if let Some(sink) = &self.sink {
            sink.record_event(json!({
                "action": "policy_applied",
                "policy": policy,
                "result": self.state,
            }));
        }

        debug!(state = %self.state, "Policy applied");
        Ok(self.state.snapshot())
    }

    /// Apply a policy submitted as a loose key/value map
    ///
    /// Unrecognized keys are ignored, not rejected, but each one is
    /// logged and counted so typos stay observable.
    pub fn apply_policy_map(
        &mut self,
        map: &BTreeMap<String, f64>,
    ) -> Result<EconomicState, SimulationError> {
        let (policy, unknown) = Policy::from_map(map);
        for key in &unknown {
            warn!(key, "Ignoring unrecognized policy key");
        }
        self.unknown_keys += unknown.len() as u64;

        self.apply_policy(&policy)
    }

    /// Run a policy sequence and return the state timeline
    ///
    /// The timeline has `policies.len() + 1` elements; element 0 is the
    /// pre-simulation snapshot.
    pub fn simulate_scenario(
        &mut self,
        policies: &[Policy],
    ) -> Result<Vec<EconomicState>, SimulationError> {
        let mut timeline = Vec::with_capacity(policies.len() + 1);
        timeline.push(self.state.snapshot());

        for policy in policies {
            timeline.push(self.apply_policy(policy)?);
        }
        Ok(timeline)
    }

    /// Restore the state and clear the history
    ///
    /// Falls back to the first history snapshot when no explicit state is
    /// given; fails with [`SimulationError::NoHistory`] when neither
    /// exists.
    pub fn reset(&mut self, initial_state: Option<EconomicState>) -> Result<(), SimulationError> {
        let target = match initial_state {
            Some(state) => state,
            None => self
                .history
                .first()
                .map(|record| record.result.clone())
                .ok_or(SimulationError::NoHistory)?,
        };

        self.state = target;
        self.history.clear();

        if let Some(sink) = &self.sink {
            sink.record_event(json!({
                "action": "reset",
                "state": self.state,
            }));
        }

        info!(state = %self.state, "Simulator reset");
        Ok(())
    }

    /// The most recent history record, if any policy has been applied
    ///
    /// Pure data access; advisory collaborators format the record (its
    /// `Display` gives a one-line summary) without calling back here.
    pub fn explain_last_action(&self) -> Option<&HistoryRecord> {
        self.history.last()
    }

    /// Full application history, oldest first
    pub fn get_history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// The live state (read-only; mutation goes through `apply_policy`)
    pub fn state(&self) -> &EconomicState {
        &self.state
    }

    /// The delegated CBDC ledger (read-only)
    pub fn ledger(&self) -> &CurrencyLedger {
        &self.ledger
    }

    /// How many unrecognized policy keys have been ignored so far
    pub fn unknown_key_count(&self) -> u64 {
        self.unknown_keys
    }
}
