//! Orchestration layer: the collaborator ports, the search debounce policy,
//! and the view controller that ties the shaping core to them.

pub mod controller;
pub mod debounce;
pub mod ports;

pub use controller::{ViewController, ViewState};
pub use debounce::Debouncer;
pub use ports::{
    CandidateSource, DataMode, DetailView, DonationSource, OverviewView, RenderSink,
};
