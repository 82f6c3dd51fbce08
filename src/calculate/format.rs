//! Human-readable metric values.
//!
//! Formatting never feeds back into ordering: sorting always uses
//! [`TeamStatistics::metric_value`].

use crate::models::{ScoringMetric, TeamStatistics};

/// Render seconds as `XhYmZs`, omitting zero-valued units.
///
/// Fractions of a second are truncated; zero renders as an empty string.
pub fn format_duration(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as i64;
    let minutes = ((seconds % 3600.0) / 60.0) as i64;
    let secs = (seconds % 60.0) as i64;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if secs > 0 {
        out.push_str(&format!("{}s", secs));
    }
    out
}

/// Round to two decimal places, halves to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Plain numeric text of a metric (AVERAGE rounded to 2 decimals).
pub fn standing_text(stats: &TeamStatistics, metric: ScoringMetric) -> String {
    match metric {
        ScoringMetric::Total => stats.total_points.to_string(),
        ScoringMetric::Average => round2(stats.average_points).to_string(),
        ScoringMetric::BestFinish => stats.best_finish.to_string(),
        ScoringMetric::WorstFinish => stats.worst_finish.to_string(),
    }
}

/// Value shown in a standings column.
///
/// Time-based sports show TOTAL and AVERAGE as durations.
pub fn display_value(stats: &TeamStatistics, metric: ScoringMetric, time_based: bool) -> String {
    match metric {
        ScoringMetric::Total if time_based => format_duration(stats.total_points),
        ScoringMetric::Average if time_based => format_duration(stats.average_points),
        _ => standing_text(stats, metric),
    }
}

/// Whether a rendered value means "no result".
pub fn is_textual_zero(text: &str) -> bool {
    matches!(text, "0" | "0.0" | "-0" | "-0.0")
}
