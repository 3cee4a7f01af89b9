use crate::app::ports::{CandidateSource, DonationSource};
use crate::domain::{Candidate, Donation, RawCandidateData};
use crate::error::Result;
use async_trait::async_trait;

/// The fixed dataset the controller substitutes when the live candidate
/// fetch fails. Also usable directly as an offline source via `--demo`.
pub fn demo_candidates() -> Vec<Candidate> {
    let parties = [
        "DEMOCRATIC PARTY",
        "REPUBLICAN PARTY",
        "LIBERTARIAN PARTY",
        "GREEN PARTY",
    ];
    parties
        .iter()
        .enumerate()
        .map(|(index, party)| Candidate {
            id: format!("P0000000{}", index + 1),
            name: format!("Demo Candidate {}", index + 1),
            party: party.to_string(),
            state: "US".to_string(),
            office: "President".to_string(),
            election_cycles: "2024".to_string(),
            status: "Active".to_string(),
        })
        .collect()
}

/// Offline source serving the demo dataset and empty donation lists
pub struct DemoDataSource;

#[async_trait]
impl CandidateSource for DemoDataSource {
    async fn fetch_candidates(&self) -> Result<RawCandidateData> {
        Ok(serde_json::to_value(demo_candidates())?)
    }
}

#[async_trait]
impl DonationSource for DemoDataSource {
    async fn fetch_donations(&self, _candidate_id: &str) -> Result<Vec<Donation>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::normalize_candidates;

    #[test]
    fn demo_dataset_is_already_canonical() {
        let candidates = demo_candidates();
        let payload = serde_json::to_value(&candidates).unwrap();
        assert_eq!(normalize_candidates(&payload), candidates);
    }

    #[test]
    fn demo_dataset_has_four_distinct_parties() {
        let candidates = demo_candidates();
        assert_eq!(candidates.len(), 4);
        let stats = crate::shaping::candidate_stats(&candidates);
        assert_eq!(stats.total_parties, 4);
        assert_eq!(stats.total_states, 1);
    }
}
