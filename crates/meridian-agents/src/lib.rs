//! # Meridian Agents
//!
//! Multi-agent stress driver: N independent agents, each owning its own
//! state copy and a simplistic action policy that nudges one monetary
//! instrument per step. Agents never share mutable state; they see only
//! the read-only [`GlobalContext`].
//!
//! All randomness flows from one seedable generator owned by the driver,
//! so a stress run is fully reproducible from `(agents, seed, context,
//! steps)`.

pub mod agent;
pub mod config;
pub mod simulator;

pub use agent::{AgentStep, GlobalContext, SandboxAgent};
pub use config::StressConfig;
pub use simulator::AgentSimulator;

/// Bound on a single interest-rate nudge (± fraction)
pub const MAX_RATE_NUDGE: f64 = 0.01;

/// Bound on a single reserve-requirement nudge (± fraction)
pub const MAX_RESERVE_NUDGE: f64 = 0.02;
