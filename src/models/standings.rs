//! Ranked standings snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, ScoringMetric, TeamId, TeamStatistics};
use crate::calculate::display_value;
use crate::scope::Scope;

/// One rendered standings line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: u32,
    pub team_id: TeamId,
    pub label: String,
    pub is_replaced: bool,
    /// `(metric, displayed value)` per active metric
    pub values: Vec<(ScoringMetric, String)>,
}

/// Ordered, ranked teams for one scope at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standings {
    pub scope: Scope,
    pub entity_id: EntityId,

    /// When the ranking was computed
    pub computed_at: DateTime<Utc>,

    /// Metrics used for ordering, in precedence order
    pub metrics: Vec<ScoringMetric>,

    /// Rendered ordering, e.g. `IsReplaced asc, LadderRank asc, TOTAL desc, Name asc`
    pub order_by: String,

    /// TOTAL and AVERAGE display as durations
    pub time_based: bool,

    /// Teams in rank order
    pub teams: Vec<TeamStatistics>,
}

impl Standings {
    /// Get the ranked record for one team.
    pub fn find_team(&self, team_id: &TeamId) -> Option<&TeamStatistics> {
        self.teams.iter().find(|t| &t.team_id == team_id)
    }

    /// Display labels in rank order, `"{rank} {name}"` when numbered.
    pub fn labels(&self, numbered: bool) -> Vec<String> {
        self.teams
            .iter()
            .map(|t| {
                if numbered {
                    format!("{} {}", t.rank, t.display_name())
                } else {
                    t.display_name()
                }
            })
            .collect()
    }

    /// Rendered lines for every team.
    pub fn rows(&self, numbered: bool) -> Vec<StandingRow> {
        self.teams
            .iter()
            .zip(self.labels(numbered))
            .map(|(t, label)| StandingRow {
                rank: t.rank,
                team_id: t.team_id.clone(),
                label,
                is_replaced: t.is_replaced,
                values: self
                    .metrics
                    .iter()
                    .map(|&m| (m, display_value(t, m, self.time_based)))
                    .collect(),
            })
            .collect()
    }
}
