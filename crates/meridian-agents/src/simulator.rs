//! Multi-agent stress driver

use std::collections::BTreeMap;

use meridian_common::Policy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::agent::{AgentStep, GlobalContext, SandboxAgent};
use crate::config::StressConfig;

/// Drives N independent agents through stochastic policy steps
///
/// Owns the only RNG in the run; agents draw from it in a fixed order
/// (their insertion order), which makes a run a pure function of
/// `(agents, seed, context, steps)`.
pub struct AgentSimulator {
    agents: Vec<SandboxAgent>,
    rng: StdRng,
}

impl AgentSimulator {
    /// Create a driver over `agents` with a seeded generator
    pub fn new(agents: Vec<SandboxAgent>, seed: u64) -> Self {
        info!(agents = agents.len(), seed, "Agent simulator initialized");
        Self {
            agents,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a uniform fleet (`agent-0` .. `agent-N-1`) from config
    pub fn from_config(config: &StressConfig) -> Self {
        let agents = (0..config.agents)
            .map(|i| SandboxAgent::new(format!("agent-{i}"), config.initial_state.clone()))
            .collect();
        Self::new(agents, config.seed)
    }

    /// Advance every agent by one action
    ///
    /// Returns each agent's action keyed by name, in deterministic
    /// (sorted) order.
    pub fn step(&mut self, ctx: &GlobalContext) -> BTreeMap<String, Policy> {
        let mut actions = BTreeMap::new();
        for agent in &mut self.agents {
            let action = agent.act(ctx, &mut self.rng);
            actions.insert(agent.name().to_string(), action);
        }
        debug!(agents = actions.len(), "Stress step complete");
        actions
    }

    /// Run `steps` sequential rounds and return every agent's history
    pub fn run(&mut self, steps: usize, ctx: &GlobalContext) -> BTreeMap<String, Vec<AgentStep>> {
        for _ in 0..steps {
            self.step(ctx);
        }

        self.agents
            .iter()
            .map(|agent| (agent.name().to_string(), agent.history().to_vec()))
            .collect()
    }

    /// The driven agents, in insertion order
    pub fn agents(&self) -> &[SandboxAgent] {
        &self.agents
    }
}
