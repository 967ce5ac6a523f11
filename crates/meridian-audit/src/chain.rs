//! Hash-chained audit log
//!
//! Single-writer append discipline: the entry list and `last_hash` live
//! under one `RwLock`, so `record` calls are strictly totally ordered
//! while `verify_chain`/`export` run as concurrent reads. The chain lives
//! for the process lifetime or until exported for persistence.

use chrono::{SecondsFormat, Utc};
use meridian_common::AuditError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// One persisted audit record
///
/// `hash` covers the canonical JSON of the other three fields; `prev_hash`
/// is `None` only for the genesis entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// RFC 3339 UTC capture time
    pub timestamp: String,

    /// Arbitrary event payload supplied by the writer
    pub event: Value,

    /// Hash of the predecessor entry (null sentinel at genesis)
    pub prev_hash: Option<String>,

    /// SHA-256 over the canonical form of the fields above, hex-encoded
    pub hash: String,
}

impl AuditEntry {
    /// Recompute this entry's hash from its own fields
    fn computed_hash(&self) -> String {
        entry_hash(&self.timestamp, &self.event, &self.prev_hash)
    }
}

/// Hash the pre-image `{timestamp, event, prev_hash}` in canonical form
///
/// The pre-image is assembled as a `serde_json` object, whose map keeps
/// keys sorted, so the bytes hashed here match
/// [`crate::canonical::canonical_json`] output.
fn entry_hash(timestamp: &str, event: &Value, prev_hash: &Option<String>) -> String {
    let mut pre_image = serde_json::Map::new();
    pre_image.insert("timestamp".to_string(), Value::String(timestamp.to_string()));
    pre_image.insert("event".to_string(), event.clone());
    pre_image.insert(
        "prev_hash".to_string(),
        match prev_hash {
            Some(hash) => Value::String(hash.clone()),
            None => Value::Null,
        },
    );

    let canon = Value::Object(pre_image).to_string();
    hex::encode(Sha256::digest(canon.as_bytes()))
}

#[derive(Debug, Default)]
struct ChainState {
    entries: Vec<AuditEntry>,
    last_hash: Option<String>,
}

/// Append-only, tamper-evident audit chain
#[derive(Debug, Default)]
pub struct AuditChain {
    state: RwLock<ChainState>,
}

impl AuditChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, linking it to the current chain head
    ///
    /// Returns a copy of the appended entry. Hashing an in-memory JSON
    /// value cannot fail, so recording is infallible.
    pub fn record(&self, event: Value) -> AuditEntry {
        let mut state = self.state.write();

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let prev_hash = state.last_hash.clone();
        let hash = entry_hash(&timestamp, &event, &prev_hash);

        let entry = AuditEntry {
            timestamp,
            event,
            prev_hash,
            hash: hash.clone(),
        };

        state.entries.push(entry.clone());
        state.last_hash = Some(hash);
        debug!(index = state.entries.len() - 1, "Audit event recorded");
        entry
    }

    /// Walk the chain and check every linkage and every stored hash
    ///
    /// Returns `false` on the first mismatch; never panics or errors —
    /// integrity failure is a reportable condition, not a crash.
    pub fn verify_chain(&self) -> bool {
        let state = self.state.read();
        verify_entries(&state.entries)
    }

    /// Ordered snapshot of all entries, suitable for persistence
    pub fn export(&self) -> Vec<AuditEntry> {
        self.state.read().entries.clone()
    }

    /// Export the chain as a JSON array string
    ///
    /// The produced structure round-trips through [`verify_entries`], so
    /// the persisted form can be independently re-verified.
    pub fn export_json(&self) -> Result<String, AuditError> {
        let state = self.state.read();
        serde_json::to_string_pretty(&state.entries).map_err(AuditError::from)
    }

    /// Hash of the chain head, if any entry exists
    pub fn last_hash(&self) -> Option<String> {
        self.state.read().last_hash.clone()
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    /// True when nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }
}

/// Verify a persisted entry sequence independently of any live chain
///
/// Replays the same checks as [`AuditChain::verify_chain`]: linkage from
/// the null sentinel forward, plus hash recomputation per entry.
pub fn verify_entries(entries: &[AuditEntry]) -> bool {
    let mut running_prev: Option<&str> = None;

    for (index, entry) in entries.iter().enumerate() {
        if entry.prev_hash.as_deref() != running_prev {
            warn!(index, "Audit chain linkage mismatch");
            return false;
        }

        if entry.computed_hash() != entry.hash {
            warn!(index, "Audit entry hash mismatch");
            return false;
        }

        running_prev = Some(entry.hash.as_str());
    }

    true
}

/// Injected sink for state-changing sandbox events
///
/// Components that must leave an audit trail depend on this trait rather
/// than on the chain type, keeping the trail replaceable in tests.
pub trait EventSink: Send + Sync {
    fn record_event(&self, event: Value);
}

impl EventSink for AuditChain {
    fn record_event(&self, event: Value) {
        self.record(event);
    }
}
