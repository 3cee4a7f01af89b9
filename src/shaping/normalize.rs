use crate::constants::{
    DEFAULT_ELECTION_CYCLES, DEFAULT_OFFICE, DEFAULT_PARTY, DEFAULT_STATE, DEFAULT_STATUS,
};
use crate::domain::{Candidate, RawCandidateData};
use serde_json::Value;
use tracing::{debug, warn};

/// Validates and canonicalizes a raw candidate payload.
///
/// Records without a non-empty `id` and `name` are dropped; the drop is a
/// filtering decision, not an error, and is only visible as a diagnostic.
/// A payload that is not an array yields an empty list rather than failing.
/// Output is sorted ascending by name, case-insensitive, regardless of
/// input order.
pub fn normalize_candidates(raw: &RawCandidateData) -> Vec<Candidate> {
    let records = match raw.as_array() {
        Some(records) => records,
        None => {
            warn!("candidate payload is not an array, treating as empty");
            return Vec::new();
        }
    };

    let mut candidates: Vec<Candidate> = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        match canonicalize(record) {
            Some(candidate) => candidates.push(candidate),
            None => {
                dropped += 1;
                debug!(%record, "dropping candidate record without id/name");
            }
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = candidates.len(), "skipped invalid candidate records");
    }

    // Stable sort keeps input order for name ties
    candidates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    candidates
}

fn canonicalize(record: &Value) -> Option<Candidate> {
    let id = non_empty_str(record.get("id"))?;
    let name = non_empty_str(record.get("name"))?;

    Some(Candidate {
        id: id.to_string(),
        name: name.to_string(),
        party: field_or_default(record, "party", DEFAULT_PARTY),
        state: field_or_default(record, "state", DEFAULT_STATE),
        office: field_or_default(record, "office", DEFAULT_OFFICE),
        election_cycles: field_or_default(record, "electionCycles", DEFAULT_ELECTION_CYCLES),
        status: field_or_default(record, "status", DEFAULT_STATUS),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn field_or_default(record: &Value, field: &str, default: &str) -> String {
    match non_empty_str(record.get(field)) {
        Some(value) => value.to_string(),
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn applies_defaults_and_sorts_by_name() {
        let raw = json!([
            {"id": "P1", "name": "Zed", "party": "GREEN PARTY"},
            {"id": "P2", "name": "Amy", "party": "green party"}
        ]);
        let candidates = normalize_candidates(&raw);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Amy");
        assert_eq!(candidates[1].name, "Zed");
        assert_eq!(candidates[0].state, "US");
        assert_eq!(candidates[0].office, "President");
        assert_eq!(candidates[0].election_cycles, "2024");
        assert_eq!(candidates[0].status, "Active");
        // Display casing survives normalization
        assert_eq!(candidates[0].party, "green party");
    }

    #[test]
    fn sort_is_case_insensitive() {
        let raw = json!([
            {"id": "P1", "name": "amy adams"},
            {"id": "P2", "name": "Amy Aardvark"}
        ]);
        let candidates = normalize_candidates(&raw);
        assert_eq!(candidates[0].name, "Amy Aardvark");
        assert_eq!(candidates[1].name, "amy adams");
    }

    #[test]
    fn drops_records_missing_id_or_name() {
        let raw = json!([
            {"id": "", "name": "X"},
            {"id": "P3"},
            {"name": "No Id"},
            "not even a record",
            {"id": "P4", "name": "Kept"}
        ]);
        let candidates = normalize_candidates(&raw);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "P4");
    }

    #[test]
    fn non_array_payload_yields_empty_list() {
        assert!(normalize_candidates(&json!({"unexpected": "record"})).is_empty());
        assert!(normalize_candidates(&json!("nope")).is_empty());
        assert!(normalize_candidates(&json!(null)).is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = json!([
            {"id": "P1", "name": "Zed"},
            {"id": "P2", "name": "Amy", "party": "INDEPENDENT", "state": "VT"}
        ]);
        let once = normalize_candidates(&raw);
        let round_tripped = serde_json::to_value(&once).unwrap();
        let twice = normalize_candidates(&round_tripped);
        assert_eq!(once, twice);
    }

    #[test]
    fn output_never_exceeds_input_length() {
        let raw = json!([
            {"id": "P1", "name": "A"},
            {"id": "P2"},
            {"id": "P3", "name": "B"}
        ]);
        assert!(normalize_candidates(&raw).len() <= 3);
    }
}
