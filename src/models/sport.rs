//! Sport-level scoring configuration.

use serde::{Deserialize, Serialize};

use super::ScoringMetric;
use crate::error::StandingsError;

/// Resolved scoring flags for the sport whose teams are being ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportConfig {
    /// Sport name (empty when no sport applies)
    #[serde(default)]
    pub name: String,

    /// Lower points rank better (e.g. golf strokes, race times)
    #[serde(default)]
    pub points_rank_ascending: bool,

    /// Worst-performing events excluded from the total
    #[serde(default)]
    pub drop_lowest: u32,

    /// Best-performing events excluded from the total
    #[serde(default)]
    pub drop_highest: u32,

    /// Sum raw results instead of looking positions up in the point table
    #[serde(default)]
    pub use_actual_result: bool,

    /// Points per finishing position, index 0 = 1st place
    #[serde(default)]
    pub assigned_point_values: Vec<f64>,

    /// Results are durations in seconds
    #[serde(default)]
    pub is_time_based: bool,

    /// Metric the sport ranks by when the caller asks for nothing else
    #[serde(default)]
    pub default_metric: Option<ScoringMetric>,
}

impl Default for SportConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            points_rank_ascending: false,
            drop_lowest: 0,
            drop_highest: 0,
            use_actual_result: false,
            assigned_point_values: Vec::new(),
            is_time_based: false,
            default_metric: None,
        }
    }
}

impl SportConfig {
    /// Builder method to set drop counts.
    pub fn with_drops(mut self, drop_lowest: u32, drop_highest: u32) -> Self {
        self.drop_lowest = drop_lowest;
        self.drop_highest = drop_highest;
        self
    }

    /// Builder method to switch to position scoring with a point table.
    pub fn with_point_values(mut self, values: Vec<f64>) -> Self {
        self.use_actual_result = false;
        self.assigned_point_values = values;
        self
    }

    /// Builder method to switch to actual-result scoring.
    pub fn with_actual_results(mut self) -> Self {
        self.use_actual_result = true;
        self
    }

    /// Builder method to mark results as durations in seconds.
    pub fn with_time_based(mut self, time_based: bool) -> Self {
        self.is_time_based = time_based;
        self
    }

    /// Results display as durations only when they are summed as actual results.
    pub fn shows_durations(&self) -> bool {
        self.use_actual_result && self.is_time_based
    }

    /// Builder method to set the default metric.
    pub fn with_default_metric(mut self, metric: ScoringMetric) -> Self {
        self.default_metric = Some(metric);
        self
    }

    /// Builder method to rank lower points first.
    pub fn with_points_rank_ascending(mut self, ascending: bool) -> Self {
        self.points_rank_ascending = ascending;
        self
    }
}

/// Parse a stored point table such as `"10,7,5,3,1"`.
///
/// Empty entries are skipped.
pub fn parse_point_values(raw: &str) -> Result<Vec<f64>, StandingsError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<f64>()
                .map_err(|_| StandingsError::InvalidPointValue(entry.to_string()))
        })
        .collect()
}
