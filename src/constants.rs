use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shared constants so the normalizer, fetch adapters, and renderers agree
/// on defaults and endpoint paths.

// Data source endpoints (relative to the configured base URL)
pub const CANDIDATES_ENDPOINT: &str = "/candidates.json";
pub const DONATIONS_ENDPOINT: &str = "/donations";
pub const DEFAULT_BASE_URL: &str = "https://know-your-leader-data.s3.amazonaws.com";

/// Quiet period for collapsing rapid search input, in milliseconds
pub const DEBOUNCE_DELAY_MS: u64 = 300;

// Canonical field defaults applied during normalization
pub const DEFAULT_PARTY: &str = "OTHER";
pub const DEFAULT_STATE: &str = "US";
pub const DEFAULT_OFFICE: &str = "President";
pub const DEFAULT_ELECTION_CYCLES: &str = "2024";
pub const DEFAULT_STATUS: &str = "Active";

/// The election cycle the stats banner advertises
pub const CURRENT_ELECTION_CYCLE: &str = "2024";

/// Display colors for the well-known parties, keyed by uppercased party name
pub static PARTY_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("DEMOCRATIC PARTY", "#1c64f2"),
        ("REPUBLICAN PARTY", "#e02424"),
        ("LIBERTARIAN PARTY", "#f59e0b"),
        ("GREEN PARTY", "#10b981"),
        ("INDEPENDENT", "#8b5cf6"),
        ("OTHER", "#6b7280"),
    ])
});

/// Look up the display color for a party, falling back to the OTHER color
pub fn party_color(party: &str) -> &'static str {
    PARTY_COLORS
        .get(party.to_uppercase().as_str())
        .copied()
        .unwrap_or_else(|| PARTY_COLORS["OTHER"])
}
