//! # Meridian Audit
//!
//! Append-only, hash-linked log of state-changing sandbox events.
//!
//! Each entry's `hash` is SHA-256 over the canonical JSON of
//! `{timestamp, event, prev_hash}`, and each entry's `prev_hash` commits
//! to its predecessor's `hash` (`null` for the genesis entry). Retroactive
//! edits to any persisted field therefore break verification.
//!
//! Canonical serialization is deterministic — objects are emitted with
//! sorted keys and stable float formatting — so a chain exported here can
//! be re-verified by another process from the persisted records alone.

pub mod canonical;
pub mod chain;

pub use canonical::canonical_json;
pub use chain::{verify_entries, AuditChain, AuditEntry, EventSink};
