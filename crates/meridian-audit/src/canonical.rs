//! Canonical JSON serialization
//!
//! Hash inputs must be byte-stable across processes, independent of struct
//! field order or insertion order. Values are funneled through
//! `serde_json::Value`, whose object map is a `BTreeMap` (this crate must
//! never enable serde_json's `preserve_order` feature), so keys come out
//! sorted at every nesting level. Floats use serde_json's shortest
//! round-trip formatting, which is itself deterministic.

use meridian_common::AuditError;
use serde::Serialize;

/// Serialize a value to its canonical JSON string
///
/// Sorted object keys, no insignificant whitespace.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, AuditError> {
    let normalized = serde_json::to_value(value)?;
    Ok(normalized.to_string())
}
