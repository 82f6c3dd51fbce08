//! Multi-key ordering of team records.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ScoringMetric, TeamStatistics};

/// Sort direction of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Field a sort key reads from a team record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    IsReplaced,
    LadderRank,
    Metric(ScoringMetric),
    TeamName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    pub fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &TeamStatistics, b: &TeamStatistics) -> Ordering {
        let ordering = match self.field {
            SortField::IsReplaced => a.is_replaced.cmp(&b.is_replaced),
            SortField::LadderRank => a.ladder_rank.cmp(&b.ladder_rank),
            SortField::Metric(metric) => a.metric_value(metric).total_cmp(&b.metric_value(metric)),
            SortField::TeamName => compare_names(&a.display_name(), &b.display_name()),
        };
        self.direction.apply(ordering)
    }
}

/// Case-insensitive name order, exact text breaking ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Direction a metric sorts in for a sport.
pub fn metric_direction(metric: ScoringMetric, points_rank_ascending: bool) -> Direction {
    match metric {
        ScoringMetric::Total | ScoringMetric::Average => {
            if points_rank_ascending {
                Direction::Asc
            } else {
                Direction::Desc
            }
        }
        ScoringMetric::BestFinish => Direction::Desc,
        ScoringMetric::WorstFinish => Direction::Asc,
    }
}

/// Ordered sort keys: replaced flag, ladder rank, metrics, then name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingSpec {
    keys: Vec<SortKey>,
}

impl OrderingSpec {
    /// Compile active metrics into sort keys. Repeated metrics are ignored.
    pub fn build(metrics: &[ScoringMetric], points_rank_ascending: bool) -> Self {
        let mut keys = vec![
            SortKey::new(SortField::IsReplaced, Direction::Asc),
            SortKey::new(SortField::LadderRank, Direction::Asc),
        ];
        for &metric in metrics {
            let field = SortField::Metric(metric);
            if keys.iter().any(|k| k.field == field) {
                continue;
            }
            keys.push(SortKey::new(field, metric_direction(metric, points_rank_ascending)));
        }
        keys.push(SortKey::new(SortField::TeamName, Direction::Asc));

        Self { keys }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Metrics between the fixed prefix and the name suffix.
    pub fn metrics(&self) -> impl Iterator<Item = ScoringMetric> + '_ {
        self.keys.iter().filter_map(|k| match k.field {
            SortField::Metric(metric) => Some(metric),
            _ => None,
        })
    }

    /// Compare two records key by key.
    pub fn compare(&self, a: &TeamStatistics, b: &TeamStatistics) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for OrderingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let field = match key.field {
                SortField::IsReplaced => "IsReplaced",
                SortField::LadderRank => "LadderRank",
                SortField::Metric(metric) => metric.code(),
                SortField::TeamName => "Name",
            };
            let direction = match key.direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            write!(f, "{} {}", field, direction)?;
        }
        Ok(())
    }
}
