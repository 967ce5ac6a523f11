//! Sandbox agents
//!
//! An agent is an independently evolving state holder, distinct from the
//! primary policy simulator. Its action rule is deliberately naive: pick
//! one instrument at random, nudge it by a bounded delta, record the
//! step.

use meridian_common::{EconomicState, Policy};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{MAX_RATE_NUDGE, MAX_RESERVE_NUDGE};

/// Read-only context shared by every agent in a run
///
/// Drift terms shift each nudge, modeling a system-wide shock (e.g. a
/// hiking cycle) pressing on all agents at once. Neutral by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalContext {
    /// Added to every interest-rate nudge
    pub rate_drift: f64,
    /// Added to every reserve-requirement nudge
    pub reserve_drift: f64,
}

/// One recorded agent step: the action taken and its outcome
///
/// `outcome` is the post-action value of the nudged instrument; scenario
/// code folds it into whatever reward function it is studying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStep {
    pub action: Policy,
    pub outcome: f64,
}

/// An independently evolving policy actor
#[derive(Debug, Clone)]
pub struct SandboxAgent {
    name: String,
    state: EconomicState,
    history: Vec<AgentStep>,
}

impl SandboxAgent {
    /// Create an agent owning a copy of `state`
    pub fn new(name: impl Into<String>, state: EconomicState) -> Self {
        Self {
            name: name.into(),
            state,
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &EconomicState {
        &self.state
    }

    /// Recorded steps, oldest first
    pub fn history(&self) -> &[AgentStep] {
        &self.history
    }

    /// Take one action: nudge a random instrument by a bounded delta
    ///
    /// Mutates only this agent's own state. The driver owns the RNG so
    /// the whole fleet replays from one seed.
    pub fn act(&mut self, ctx: &GlobalContext, rng: &mut StdRng) -> Policy {
        let (action, outcome) = if rng.gen_bool(0.5) {
            let delta = rng.gen_range(-MAX_RATE_NUDGE..=MAX_RATE_NUDGE) + ctx.rate_drift;
            let next = (self.state.interest_rate + delta).max(0.0);
            self.state.interest_rate = next;
            (Policy::new().with_interest_rate(next), next)
        } else {
            let delta = rng.gen_range(-MAX_RESERVE_NUDGE..=MAX_RESERVE_NUDGE) + ctx.reserve_drift;
            let next = (self.state.reserve_requirement + delta).max(0.0);
            self.state.reserve_requirement = next;
            (Policy::new().with_reserve_requirement(next), next)
        };

        debug!(agent = %self.name, %action, "Agent acted");
        self.history.push(AgentStep {
            action: action.clone(),
            outcome,
        });
        action
    }
}
