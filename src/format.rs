//! Display formatting helpers for renderers. These mirror what the detail
//! and stats views show: currency, human-readable dates, and abbreviated
//! counts.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats a dollar amount as `$1,234.56`. Non-finite values render as
/// `$0.00` so a bad amount never reaches the screen raw.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${dollars}.{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.chars().rev().collect()
}

/// Formats an ISO-8601 date string as e.g. `Dec 25, 2023`. An absent date
/// renders as `N/A`, an unparseable one as `Invalid Date`.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date else {
        return "N/A".to_string();
    };
    parse_iso_date(date)
        .map(|parsed| parsed.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Abbreviates large counts as `1.5K` / `2.3M`
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Uppercases the first letter of each whitespace-separated word
pub fn capitalize_words(text: &str) -> String {
    text.split_inclusive(char::is_whitespace)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Truncates display text with a trailing ellipsis once it exceeds
/// `max_length` characters
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}
