//! Scoring metric catalog.
//!
//! Every metric a standings table can show or sort by, together with its
//! label, tooltip and numeric kind.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StandingsError;

/// Numeric kind of a metric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Float,
    Integer,
}

/// A statistic selectable for display and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringMetric {
    /// Sum of points over the counted events
    #[serde(rename = "TOTAL")]
    Total,
    /// Points per counted event
    #[serde(rename = "AVERAGE")]
    Average,
    /// Best (lowest) finishing position
    #[serde(rename = "BEST_P", alias = "BEST_FINISH")]
    BestFinish,
    /// Worst (highest) finishing position
    #[serde(rename = "WORST_P", alias = "WORST_FINISH")]
    WorstFinish,
}

impl ScoringMetric {
    pub const ALL: [ScoringMetric; 4] = [
        ScoringMetric::Total,
        ScoringMetric::Average,
        ScoringMetric::BestFinish,
        ScoringMetric::WorstFinish,
    ];

    /// Stored identifier, as found in sport configuration.
    pub fn code(&self) -> &'static str {
        match self {
            ScoringMetric::Total => "TOTAL",
            ScoringMetric::Average => "AVERAGE",
            ScoringMetric::BestFinish => "BEST_P",
            ScoringMetric::WorstFinish => "WORST_P",
        }
    }

    /// Column label.
    pub fn display_name(&self) -> &'static str {
        match self {
            ScoringMetric::Total => "Total",
            ScoringMetric::Average => "Average",
            ScoringMetric::BestFinish => "Best",
            ScoringMetric::WorstFinish => "Worst",
        }
    }

    /// Tooltip text for the column header.
    pub fn description(&self) -> &'static str {
        match self {
            ScoringMetric::Total => "Total Points",
            ScoringMetric::Average => "Average Points",
            ScoringMetric::BestFinish => "Best Finishing Position",
            ScoringMetric::WorstFinish => "Worst Finishing Position",
        }
    }

    pub fn data_kind(&self) -> DataKind {
        match self {
            ScoringMetric::Total | ScoringMetric::Average => DataKind::Float,
            ScoringMetric::BestFinish | ScoringMetric::WorstFinish => DataKind::Integer,
        }
    }
}

impl std::fmt::Display for ScoringMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ScoringMetric {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOTAL" => Ok(ScoringMetric::Total),
            "AVERAGE" => Ok(ScoringMetric::Average),
            "BEST_P" | "BEST_FINISH" => Ok(ScoringMetric::BestFinish),
            "WORST_P" | "WORST_FINISH" => Ok(ScoringMetric::WorstFinish),
            _ => Err(StandingsError::UnsupportedMetric(s.to_string())),
        }
    }
}

/// Resolve a metric name coming from stored configuration.
///
/// Unknown names fall back to [`ScoringMetric::Total`] with a logged
/// diagnostic; only labels depend on this path.
pub fn lookup_metric(name: &str) -> ScoringMetric {
    match name.parse() {
        Ok(metric) => metric,
        Err(_) => {
            warn!(
                metric = name,
                known = ScoringMetric::ALL.len(),
                "Unknown standing metric, falling back to TOTAL"
            );
            ScoringMetric::Total
        }
    }
}

/// Label for a metric name; never fails.
pub fn metric_display_name(name: &str) -> &'static str {
    lookup_metric(name).display_name()
}

/// Data kind for a metric name; never fails.
pub fn metric_data_kind(name: &str) -> DataKind {
    lookup_metric(name).data_kind()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_display_names() {
        assert_eq!(ScoringMetric::Total.display_name(), "Total");
        assert_eq!(ScoringMetric::Average.display_name(), "Average");
        assert_eq!(ScoringMetric::BestFinish.display_name(), "Best");
        assert_eq!(ScoringMetric::WorstFinish.display_name(), "Worst");
    }

    #[test]
    fn test_catalog_data_kinds() {
        assert_eq!(ScoringMetric::Total.data_kind(), DataKind::Float);
        assert_eq!(ScoringMetric::Average.data_kind(), DataKind::Float);
        assert_eq!(ScoringMetric::BestFinish.data_kind(), DataKind::Integer);
        assert_eq!(ScoringMetric::WorstFinish.data_kind(), DataKind::Integer);
    }

    #[test]
    fn test_parse_codes_and_aliases() {
        assert_eq!("TOTAL".parse::<ScoringMetric>().unwrap(), ScoringMetric::Total);
        assert_eq!("average".parse::<ScoringMetric>().unwrap(), ScoringMetric::Average);
        assert_eq!(
            "BEST_FINISH".parse::<ScoringMetric>().unwrap(),
            ScoringMetric::BestFinish
        );
        assert_eq!(
            " worst_p ".parse::<ScoringMetric>().unwrap(),
            ScoringMetric::WorstFinish
        );
    }

    #[test]
    fn test_parse_unknown_metric_fails() {
        let err = "WLT".parse::<ScoringMetric>().unwrap_err();
        assert!(matches!(err, StandingsError::UnsupportedMetric(ref m) if m == "WLT"));
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_total() {
        assert_eq!(metric_display_name("SR"), "Total");
        assert_eq!(metric_data_kind("SR"), DataKind::Float);
        assert_eq!(metric_data_kind("BEST_P"), DataKind::Integer);
        assert_eq!(metric_display_name("WORST_P"), "Worst");
    }

    #[test]
    fn test_metric_serialization_uses_codes() {
        let json = serde_json::to_string(&ScoringMetric::BestFinish).unwrap();
        assert_eq!(json, "\"BEST_P\"");

        let parsed: ScoringMetric = serde_json::from_str("\"WORST_FINISH\"").unwrap();
        assert_eq!(parsed, ScoringMetric::WorstFinish);
    }

    #[test]
    fn test_display_is_code() {
        for metric in ScoringMetric::ALL {
            assert_eq!(metric.to_string(), metric.code());
        }
    }
}
