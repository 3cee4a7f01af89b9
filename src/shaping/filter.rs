use crate::domain::Candidate;

/// Reduces a candidate list to those matching a free-text query.
///
/// An empty or whitespace-only query returns the input unchanged. Otherwise
/// the trimmed, lowercased query matches any candidate where it appears as a
/// substring of the name, party, state, or id. All matches rank equally.
pub fn filter_candidates(candidates: &[Candidate], query: &str) -> Vec<Candidate> {
    let term = query.trim();
    if term.is_empty() {
        return candidates.to_vec();
    }
    let term = term.to_lowercase();

    candidates
        .iter()
        .filter(|candidate| {
            candidate.name.to_lowercase().contains(&term)
                || candidate.party.to_lowercase().contains(&term)
                || candidate.state.to_lowercase().contains(&term)
                || candidate.id.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::normalize_candidates;
    use serde_json::json;

    fn sample() -> Vec<Candidate> {
        normalize_candidates(&json!([
            {"id": "P1", "name": "Amy Smith", "state": "CA"},
            {"id": "P2", "name": "Bob Jones", "party": "GREEN PARTY", "state": "WA"},
            {"id": "P3", "name": "Cal Casey", "party": "INDEPENDENT", "state": "TX"}
        ]))
    }

    #[test]
    fn empty_and_whitespace_queries_are_identity() {
        let candidates = sample();
        assert_eq!(filter_candidates(&candidates, ""), candidates);
        assert_eq!(filter_candidates(&candidates, "   "), candidates);
    }

    #[test]
    fn matches_state_case_insensitively() {
        let candidates = normalize_candidates(&json!([
            {"id": "P1", "name": "Amy Smith", "state": "CA"}
        ]));
        assert_eq!(filter_candidates(&candidates, "ca").len(), 1);
        assert!(filter_candidates(&candidates, "tx").is_empty());
    }

    #[test]
    fn matches_across_all_four_fields() {
        let candidates = sample();
        assert_eq!(filter_candidates(&candidates, "amy").len(), 1); // name
        assert_eq!(filter_candidates(&candidates, "green").len(), 1); // party
        assert_eq!(filter_candidates(&candidates, "wa").len(), 1); // state
        assert_eq!(filter_candidates(&candidates, "p3").len(), 1); // id
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let candidates = sample();
        assert_eq!(filter_candidates(&candidates, "  amy  ").len(), 1);
    }

    #[test]
    fn result_is_a_subset_of_the_input() {
        let candidates = sample();
        for query in ["a", "p", "zzz", "PARTY"] {
            let matched = filter_candidates(&candidates, query);
            assert!(matched.iter().all(|m| candidates.contains(m)));
            assert!(matched.len() <= candidates.len());
        }
    }
}
