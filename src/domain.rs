use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Raw candidate payload as fetched from the data source, before validation
pub type RawCandidateData = serde_json::Value;

/// A presidential candidate in canonical form. Only the normalizer builds
/// these; downstream code never sees partially-shaped records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Source-provided identifier, treated as opaque
    pub id: String,
    pub name: String,
    /// Display casing is preserved; grouping uppercases separately
    pub party: String,
    pub state: String,
    pub office: String,
    #[serde(rename = "electionCycles")]
    pub election_cycles: String,
    pub status: String,
}

/// A single donation record, attached to one candidate by id. Every field
/// except `amount` is pass-through display data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Non-negative dollars; malformed or missing values collapse to 0
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: f64,
    /// ISO-8601 date string, formatted at render time
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub donor_city: Option<String>,
    #[serde(default)]
    pub donor_state: Option<String>,
    #[serde(default, rename = "type")]
    pub donation_type: Option<String>,
}

/// Accepts any JSON value for `amount`, keeping only finite non-negative
/// numbers and mapping everything else to 0.
fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .unwrap_or(0.0))
}

/// Candidates bucketed by uppercased party name. Values keep the relative
/// order of the input list.
pub type PartyGroups = BTreeMap<String, Vec<Candidate>>;

/// Summary statistics over a candidate list (full or filtered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_candidates: usize,
    pub total_parties: usize,
    pub total_states: usize,
}

/// Summary statistics over one candidate's donation list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DonationStats {
    pub total: f64,
    pub count: usize,
    /// 0 when the list is empty; renderers may show "N/A" instead
    pub average: f64,
    pub max: f64,
}
