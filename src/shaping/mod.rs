//! The data-shaping core: turns raw candidate payloads into canonical
//! records and derives the filtered, grouped, and aggregated views the
//! renderer consumes. Everything here is pure and recomputed on demand.

pub mod filter;
pub mod group;
pub mod normalize;
pub mod stats;

pub use filter::filter_candidates;
pub use group::group_by_party;
pub use normalize::normalize_candidates;
pub use stats::{candidate_stats, donation_stats};
