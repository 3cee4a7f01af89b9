use crate::app::ports::{DataMode, DetailView, OverviewView, RenderSink};
use crate::constants::{party_color, CURRENT_ELECTION_CYCLE};
use crate::format::{format_currency, format_date, format_number};

/// Console renderer bound to the view controller. This is the single
/// rendering approach in this crate; the shaping core stays UI-free.
pub struct ConsoleRenderer {
    /// Emit ANSI truecolor party headers using the shared color catalog
    pub color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn party_header(&self, party: &str, members: usize) -> String {
        let label = format!("{party} ({members})");
        if !self.color {
            return label;
        }
        match hex_to_ansi(party_color(party)) {
            Some(ansi) => format!("{ansi}{label}\x1b[0m"),
            None => label,
        }
    }
}

/// Converts a `#rrggbb` catalog color into an ANSI truecolor escape
fn hex_to_ansi(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(format!("\x1b[38;2;{r};{g};{b}m"))
}

impl RenderSink for ConsoleRenderer {
    fn render_overview(&self, view: &OverviewView) {
        println!("\n📊 Presidential Candidates");
        if view.mode == DataMode::Demo {
            println!("   ⚠️  Live data unavailable — showing demo data (offline mode)");
        }
        println!("   Total candidates:  {}", format_number(view.stats.total_candidates as u64));
        println!("   Political parties: {}", format_number(view.stats.total_parties as u64));
        println!("   States represented: {}", format_number(view.stats.total_states as u64));
        println!("   Current election cycle: {CURRENT_ELECTION_CYCLE}");

        if view.candidates.is_empty() {
            if view.total_loaded == 0 {
                println!("\n   No candidates loaded.");
            } else {
                println!("\n   No matches for \"{}\".", view.query);
            }
            return;
        }
        if !view.query.is_empty() {
            println!(
                "\n   Showing {} of {} candidates for \"{}\"",
                view.candidates.len(),
                view.total_loaded,
                view.query
            );
        }

        for (party, members) in &view.groups {
            println!("\n   {}", self.party_header(party, members.len()));
            for candidate in members {
                println!(
                    "     {:<12} {}  ({}, {})",
                    candidate.id, candidate.name, candidate.state, candidate.status
                );
            }
        }
    }

    fn render_detail(&self, view: &DetailView) {
        let candidate = &view.candidate;
        println!("\n👤 {} — {}", candidate.name, candidate.party);
        println!("   {} for {}, {} cycle ({})", candidate.status, candidate.office, candidate.election_cycles, candidate.state);
        println!("   Candidate id: {}", candidate.id);

        if view.donations.is_empty() {
            println!("\n   No donation data available for this candidate.");
            return;
        }

        println!("\n💵 Campaign Donations");
        println!("   Total raised:     {}", format_currency(view.stats.total));
        println!("   Total donations:  {}", view.stats.count);
        println!("   Average donation: {}", format_currency(view.stats.average));
        println!("   Largest donation: {}", format_currency(view.stats.max));

        for donation in &view.donations {
            println!(
                "\n   {}  on {}",
                format_currency(donation.amount),
                format_date(donation.date.as_deref())
            );
            println!(
                "     {} ({})",
                donation.donor_name.as_deref().unwrap_or("Anonymous"),
                donation.donation_type.as_deref().unwrap_or("Individual")
            );
            if let Some(employer) = donation.employer.as_deref() {
                match donation.occupation.as_deref() {
                    Some(occupation) => println!("     Employer: {employer} | Occupation: {occupation}"),
                    None => println!("     Employer: {employer}"),
                }
            }
            if let Some(city) = donation.donor_city.as_deref() {
                match donation.donor_state.as_deref() {
                    Some(state) => println!("     {city}, {state}"),
                    None => println!("     {city}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_colors_convert_to_ansi() {
        assert_eq!(
            hex_to_ansi("#1c64f2").as_deref(),
            Some("\x1b[38;2;28;100;242m")
        );
        assert!(hex_to_ansi("1c64f2").is_none());
        assert!(hex_to_ansi("#fff").is_none());
    }
}
