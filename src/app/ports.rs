use crate::domain::{Candidate, Donation, DonationStats, PartyGroups, RawCandidateData, Stats};
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Supplies the raw candidate payload. Failures and malformed payloads are
/// both recovered by the controller's demo fallback, never surfaced.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch_candidates(&self) -> Result<RawCandidateData>;
}

/// Supplies one candidate's donation list. A failure degrades to an empty
/// list at the controller.
#[async_trait]
pub trait DonationSource: Send + Sync {
    async fn fetch_donations(&self, candidate_id: &str) -> Result<Vec<Donation>>;
}

/// Whether the current candidate list came from the live source or from the
/// built-in demo dataset. Renderers must indicate demo/offline operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataMode {
    Live,
    Demo,
}

/// Everything a renderer needs for the grouped overview. `total_loaded`
/// lets it distinguish "no matches for this query" from "no candidates at
/// all".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub mode: DataMode,
    pub query: String,
    pub total_loaded: usize,
    pub candidates: Vec<Candidate>,
    pub groups: PartyGroups,
    pub stats: Stats,
}

/// One candidate's profile plus its donation summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub candidate: Candidate,
    pub donations: Vec<Donation>,
    pub stats: DonationStats,
}

/// The bound rendering collaborator. Implementations accept the views as
/// given, without further validation.
pub trait RenderSink: Send + Sync {
    fn render_overview(&self, view: &OverviewView);
    fn render_detail(&self, view: &DetailView);
}
