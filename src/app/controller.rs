use crate::app::debounce::Debouncer;
use crate::app::ports::{
    CandidateSource, DataMode, DetailView, DonationSource, OverviewView, RenderSink,
};
use crate::domain::Candidate;
use crate::error::{Result, ViewerError};
use crate::fetch::demo::demo_candidates;
use crate::shaping::{
    candidate_stats, donation_stats, filter_candidates, group_by_party, normalize_candidates,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Lifecycle of the candidate list. Filtering is a transient recomputation
/// within `Ready`, not a separate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready,
}

struct ControllerState {
    view: ViewState,
    mode: DataMode,
    /// The canonical list as produced by the normalizer; owned exclusively
    /// by the controller
    canonical: Vec<Candidate>,
    /// The currently rendered subset of the canonical list
    filtered: Vec<Candidate>,
    query: String,
}

/// Orchestrates loads, searches, and selections over the shaping core,
/// holding explicit references to its collaborators rather than reaching
/// for ambient globals.
pub struct ViewController {
    candidates: Arc<dyn CandidateSource>,
    donations: Arc<dyn DonationSource>,
    renderer: Arc<dyn RenderSink>,
    debouncer: Debouncer,
    state: Mutex<ControllerState>,
    /// Bumped on every selection so a slow donation fetch for a superseded
    /// selection can be discarded
    selection: AtomicU64,
}

impl ViewController {
    pub fn new(
        candidates: Arc<dyn CandidateSource>,
        donations: Arc<dyn DonationSource>,
        renderer: Arc<dyn RenderSink>,
        debounce_delay: Duration,
    ) -> Self {
        Self {
            candidates,
            donations,
            renderer,
            debouncer: Debouncer::new(debounce_delay),
            state: Mutex::new(ControllerState {
                view: ViewState::Idle,
                mode: DataMode::Live,
                canonical: Vec::new(),
                filtered: Vec::new(),
                query: String::new(),
            }),
            selection: AtomicU64::new(0),
        }
    }

    pub async fn view_state(&self) -> ViewState {
        self.state.lock().await.view
    }

    /// Fetches and normalizes the candidate list, resetting the filtered
    /// view to the full list. A fetch failure or a non-array payload
    /// degrades to the built-in demo dataset; neither surfaces an error.
    #[instrument(skip(self))]
    pub async fn load_all(&self) {
        self.state.lock().await.view = ViewState::Loading;

        let (canonical, mode) = match self.candidates.fetch_candidates().await {
            Ok(payload) if payload.is_array() => {
                (normalize_candidates(&payload), DataMode::Live)
            }
            Ok(_) => {
                warn!("candidate payload is not an array, falling back to demo dataset");
                (demo_candidates(), DataMode::Demo)
            }
            Err(err) => {
                warn!(error = %err, "candidate fetch failed, falling back to demo dataset");
                (demo_candidates(), DataMode::Demo)
            }
        };
        info!(count = canonical.len(), ?mode, "candidate list loaded");

        let mut state = self.state.lock().await;
        state.canonical = canonical;
        state.filtered = state.canonical.clone();
        state.query.clear();
        state.mode = mode;
        state.view = ViewState::Ready;
        self.notify_overview(&state);
    }

    /// Applies a search query to the canonical list. Rapid successive calls
    /// collapse so only the last query within the quiet period triggers
    /// recomputation.
    pub async fn search(&self, query: &str) {
        if !self.debouncer.admit().await {
            debug!(query, "query superseded before the quiet period elapsed");
            return;
        }

        let mut state = self.state.lock().await;
        state.query = query.trim().to_string();
        state.filtered = filter_candidates(&state.canonical, &state.query);
        debug!(
            query = %state.query,
            matches = state.filtered.len(),
            "search recomputed"
        );
        self.notify_overview(&state);
    }

    /// Looks up a candidate and hands its profile plus donation summary to
    /// the renderer. An unknown id is a logged no-op. A donation fetch
    /// failure degrades to an empty list. Results arriving after the
    /// candidate was superseded by a newer selection are discarded.
    #[instrument(skip(self))]
    pub async fn select_candidate(&self, candidate_id: &str) {
        let candidate = match self.find_candidate(candidate_id).await {
            Ok(candidate) => candidate,
            Err(err) => {
                debug!(error = %err, "selection ignored");
                return;
            }
        };

        let generation = self.selection.fetch_add(1, Ordering::SeqCst) + 1;
        let donations = match self.donations.fetch_donations(candidate_id).await {
            Ok(donations) => donations,
            Err(err) => {
                warn!(candidate_id, error = %err, "donation fetch failed, showing no donation data");
                Vec::new()
            }
        };
        if self.selection.load(Ordering::SeqCst) != generation {
            debug!(candidate_id, "discarding donation results for a superseded selection");
            return;
        }

        let stats = donation_stats(&donations);
        info!(candidate_id, donations = donations.len(), "candidate detail ready");
        self.renderer.render_detail(&DetailView {
            candidate,
            donations,
            stats,
        });
    }

    async fn find_candidate(&self, candidate_id: &str) -> Result<Candidate> {
        self.state
            .lock()
            .await
            .canonical
            .iter()
            .find(|candidate| candidate.id == candidate_id)
            .cloned()
            .ok_or_else(|| ViewerError::NotFound {
                candidate_id: candidate_id.to_string(),
            })
    }

    fn notify_overview(&self, state: &ControllerState) {
        self.renderer.render_overview(&OverviewView {
            mode: state.mode,
            query: state.query.clone(),
            total_loaded: state.canonical.len(),
            candidates: state.filtered.clone(),
            groups: group_by_party(&state.filtered),
            stats: candidate_stats(&state.filtered),
        });
    }
}
