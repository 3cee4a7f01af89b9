use crate::constants::DEFAULT_PARTY;
use crate::domain::{Candidate, PartyGroups};

/// Partitions candidates into party-keyed buckets.
///
/// The key is the uppercased party name so that "Green Party" and
/// "GREEN PARTY" land in the same bucket. Each candidate belongs to exactly
/// one bucket, in the order it appeared in the input.
pub fn group_by_party(candidates: &[Candidate]) -> PartyGroups {
    let mut groups = PartyGroups::new();
    for candidate in candidates {
        let key = if candidate.party.is_empty() {
            DEFAULT_PARTY.to_string()
        } else {
            candidate.party.to_uppercase()
        };
        groups.entry(key).or_default().push(candidate.clone());
    }
    groups
}
