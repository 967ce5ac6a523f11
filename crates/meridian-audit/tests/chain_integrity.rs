//! Tamper-evidence integration tests
//!
//! A chain built from any record sequence verifies; mutating any single
//! field of any persisted entry breaks verification.

use meridian_audit::{verify_entries, AuditChain};
use serde_json::json;

fn build_chain(n: usize) -> AuditChain {
    let chain = AuditChain::new();
    for i in 0..n {
        chain.record(json!({
            "action": "policy_applied",
            "sequence": i,
            "rate": 0.01 * i as f64,
        }));
    }
    chain
}

#[test]
fn any_record_sequence_verifies() {
    for n in [0, 1, 2, 5, 20] {
        let chain = build_chain(n);
        assert!(chain.verify_chain(), "chain of {n} entries must verify");
        assert_eq!(chain.len(), n);
    }
}

#[test]
fn tampering_each_field_breaks_verification() {
    let pristine = build_chain(4).export();
    assert!(verify_entries(&pristine));

    for index in 0..pristine.len() {
        // timestamp
        let mut entries = pristine.clone();
        entries[index].timestamp = "1970-01-01T00:00:00.000000Z".to_string();
        assert!(!verify_entries(&entries), "timestamp tamper at {index}");

        // event payload
        let mut entries = pristine.clone();
        entries[index].event = json!({"action": "forged"});
        assert!(!verify_entries(&entries), "event tamper at {index}");

        // prev_hash linkage
        let mut entries = pristine.clone();
        entries[index].prev_hash = Some("00".repeat(32));
        assert!(!verify_entries(&entries), "prev_hash tamper at {index}");

        // stored hash
        let mut entries = pristine.clone();
        entries[index].hash = "ff".repeat(32);
        assert!(!verify_entries(&entries), "hash tamper at {index}");
    }
}

#[test]
fn persisted_form_replays_verification() {
    let chain = build_chain(3);
    let exported = chain.export_json().unwrap();

    // A separate process would deserialize the array and re-run the walk
    let replayed: Vec<meridian_audit::AuditEntry> = serde_json::from_str(&exported).unwrap();
    assert!(verify_entries(&replayed));

    // Field set and order survive the round trip
    assert_eq!(replayed, chain.export());
}

#[test]
fn truncation_from_the_front_is_detected() {
    let entries = build_chain(3).export();

    // Dropping the genesis entry leaves entry 1 claiming a predecessor
    // that the sequence no longer starts from
    assert!(!verify_entries(&entries[1..]));

    // Truncating the tail is indistinguishable from a shorter chain and
    // still verifies; callers compare last_hash against a trusted head
    assert!(verify_entries(&entries[..2]));
}
