use crate::domain::{Candidate, Donation, DonationStats, Stats};
use std::collections::HashSet;

/// Computes summary statistics for a candidate list (full or filtered).
/// Distinct-party and distinct-state counts use the stored display values;
/// empty strings are not counted.
pub fn candidate_stats(candidates: &[Candidate]) -> Stats {
    let mut parties: HashSet<&str> = HashSet::new();
    let mut states: HashSet<&str> = HashSet::new();
    for candidate in candidates {
        if !candidate.party.is_empty() {
            parties.insert(candidate.party.as_str());
        }
        if !candidate.state.is_empty() {
            states.insert(candidate.state.as_str());
        }
    }
    Stats {
        total_candidates: candidates.len(),
        total_parties: parties.len(),
        total_states: states.len(),
    }
}

/// Computes total, count, average, and largest donation for one candidate's
/// donation list. The empty list yields all zeroes; the division is guarded
/// so NaN never reaches a renderer.
pub fn donation_stats(donations: &[Donation]) -> DonationStats {
    let count = donations.len();
    let total: f64 = donations.iter().map(|donation| donation.amount).sum();
    let average = if count == 0 { 0.0 } else { total / count as f64 };
    let max = donations
        .iter()
        .map(|donation| donation.amount)
        .fold(0.0_f64, f64::max);
    DonationStats {
        total,
        count,
        average,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::normalize_candidates;
    use serde_json::json;

    #[test]
    fn empty_candidate_list_yields_zeroes() {
        assert_eq!(candidate_stats(&[]), Stats::default());
    }

    #[test]
    fn counts_distinct_parties_and_states() {
        let candidates = normalize_candidates(&json!([
            {"id": "P1", "name": "A", "party": "GREEN PARTY", "state": "WA"},
            {"id": "P2", "name": "B", "party": "GREEN PARTY", "state": "OR"},
            {"id": "P3", "name": "C", "party": "INDEPENDENT", "state": "WA"}
        ]));
        let stats = candidate_stats(&candidates);
        assert_eq!(stats.total_candidates, 3);
        assert_eq!(stats.total_parties, 2);
        assert_eq!(stats.total_states, 2);
    }

    #[test]
    fn total_candidates_always_matches_input_length() {
        let candidates = normalize_candidates(&json!([
            {"id": "P1", "name": "A"},
            {"id": "P2", "name": "B"}
        ]));
        assert_eq!(candidate_stats(&candidates).total_candidates, candidates.len());
    }

    #[test]
    fn empty_donation_list_yields_zeroes_not_nan() {
        let stats = donation_stats(&[]);
        assert_eq!(stats, DonationStats::default());
        assert!(stats.average.is_finite());
        assert!(stats.max.is_finite());
    }

    #[test]
    fn sums_counts_and_averages() {
        let donations: Vec<Donation> =
            serde_json::from_value(json!([{"amount": 100}, {"amount": 50}])).unwrap();
        let stats = donation_stats(&donations);
        assert_eq!(stats.total, 150.0);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average, 75.0);
        assert_eq!(stats.max, 100.0);
    }

    #[test]
    fn malformed_amounts_count_as_zero() {
        let donations: Vec<Donation> =
            serde_json::from_value(json!([{"amount": "oops"}, {"amount": 40}])).unwrap();
        let stats = donation_stats(&donations);
        assert_eq!(stats.total, 40.0);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average, 20.0);
    }
}
