//! Per-team season statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ScoringMetric, TeamId};

/// Longest team name shown before truncation.
pub const MAX_DISPLAY_NAME_CHARS: usize = 18;

/// Characters kept when a name is truncated (plus the ellipsis marker).
const TRUNCATED_NAME_CHARS: usize = 15;

/// One team's outcome in one completed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResultRow {
    pub team_id: TeamId,

    /// Raw numeric result (points, seconds, strokes)
    #[serde(default)]
    pub result: Option<f64>,

    /// Finishing position (1 = winner)
    #[serde(default)]
    pub position: Option<i32>,
}

impl EventResultRow {
    pub fn new(team_id: impl Into<TeamId>, result: Option<f64>, position: Option<i32>) -> Self {
        Self {
            team_id: team_id.into(),
            result,
            position,
        }
    }
}

/// Identity and status of a team in scope, resolved by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamBootstrap {
    pub team_id: TeamId,
    pub name: String,
    #[serde(default)]
    pub division_name: String,
    #[serde(default)]
    pub league_name: String,
    #[serde(default)]
    pub sport_name: String,

    /// Team was replaced by forfeit or bye
    #[serde(default)]
    pub is_replaced: bool,

    /// Ladder position, 0 when ladder scheduling is inactive
    #[serde(default)]
    pub ladder_rank: u32,

    /// Team has been approved
    #[serde(default)]
    pub active_team: bool,

    #[serde(default)]
    pub league_allow_team_join: bool,

    #[serde(default)]
    pub playoff_best_rank: u32,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TeamBootstrap {
    /// Create an active, unreplaced team with no ladder rank.
    pub fn new(team_id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            name: name.into(),
            division_name: String::new(),
            league_name: String::new(),
            sport_name: String::new(),
            is_replaced: false,
            ladder_rank: 0,
            active_team: true,
            league_allow_team_join: false,
            playoff_best_rank: 0,
            created_at: None,
        }
    }

    /// Builder method to mark the team replaced.
    pub fn replaced(mut self) -> Self {
        self.is_replaced = true;
        self
    }

    /// Builder method to set the ladder rank.
    pub fn with_ladder_rank(mut self, rank: u32) -> Self {
        self.ladder_rank = rank;
        self
    }
}

/// Mutable statistics record for one team in one ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub team_id: TeamId,

    /// Full team name; see [`TeamStatistics::display_name`]
    pub team_name: String,
    pub division_name: String,
    pub league_name: String,
    pub sport_name: String,

    pub is_replaced: bool,
    pub ladder_rank: u32,
    pub active_team: bool,
    pub league_allow_team_join: bool,
    pub playoff_best_rank: u32,
    pub created_at: Option<DateTime<Utc>>,

    /// Raw results in arrival order
    pub results: Vec<f64>,

    /// Finishing positions, sorted ascending once scored
    pub positions: Vec<i32>,

    pub total_points: f64,
    pub average_points: f64,
    pub best_finish: i32,
    pub worst_finish: i32,

    /// 1-based rank, 0 until ranked
    pub rank: u32,
    pub total_teams: u32,
}

impl TeamStatistics {
    /// Create an empty record for a team in scope.
    pub fn new(team: TeamBootstrap) -> Self {
        Self {
            team_id: team.team_id,
            team_name: team.name,
            division_name: team.division_name,
            league_name: team.league_name,
            sport_name: team.sport_name,
            is_replaced: team.is_replaced,
            ladder_rank: team.ladder_rank,
            active_team: team.active_team,
            league_allow_team_join: team.league_allow_team_join,
            playoff_best_rank: team.playoff_best_rank,
            created_at: team.created_at,
            results: Vec::new(),
            positions: Vec::new(),
            total_points: 0.0,
            average_points: 0.0,
            best_finish: 0,
            worst_finish: 0,
            rank: 0,
            total_teams: 0,
        }
    }

    /// Number of recorded events (one per recorded position).
    pub fn number_of_events(&self) -> usize {
        self.positions.len()
    }

    /// Team name limited to 18 visible characters.
    pub fn display_name(&self) -> String {
        if self.team_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
            let head: String = self.team_name.chars().take(TRUNCATED_NAME_CHARS).collect();
            format!("{}...", head)
        } else {
            self.team_name.clone()
        }
    }

    /// Numeric value of a metric, used for ordering.
    pub fn metric_value(&self, metric: ScoringMetric) -> f64 {
        match metric {
            ScoringMetric::Total => self.total_points,
            ScoringMetric::Average => self.average_points,
            ScoringMetric::BestFinish => self.best_finish as f64,
            ScoringMetric::WorstFinish => self.worst_finish as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_statistics_are_empty() {
        let stats = TeamStatistics::new(TeamBootstrap::new("t1", "Alpha").with_ladder_rank(3));

        assert_eq!(stats.team_id, TeamId::from("t1"));
        assert_eq!(stats.ladder_rank, 3);
        assert!(stats.active_team);
        assert_eq!(stats.number_of_events(), 0);
        assert_eq!(stats.total_points, 0.0);
        assert_eq!(stats.best_finish, 0);
        assert_eq!(stats.rank, 0);
    }

    #[test]
    fn test_display_name_short_names_untouched() {
        let stats = TeamStatistics::new(TeamBootstrap::new("t1", "Eighteen chars ok!"));
        assert_eq!(stats.display_name(), "Eighteen chars ok!");
    }

    #[test]
    fn test_display_name_truncates_long_names() {
        let stats = TeamStatistics::new(TeamBootstrap::new("t1", "The Extremely Long Team Name"));
        assert_eq!(stats.display_name(), "The Extremely L...");
        assert_eq!(stats.display_name().chars().count(), MAX_DISPLAY_NAME_CHARS);
    }

    #[test]
    fn test_display_name_counts_characters_not_bytes() {
        let stats = TeamStatistics::new(TeamBootstrap::new("t1", "Équipe Très Rapide Été"));
        assert_eq!(stats.display_name(), "Équipe Très Rap...");
    }

    #[test]
    fn test_metric_value() {
        let mut stats = TeamStatistics::new(TeamBootstrap::new("t1", "Alpha"));
        stats.total_points = 17.0;
        stats.average_points = 5.6667;
        stats.best_finish = 1;
        stats.worst_finish = 6;

        assert_eq!(stats.metric_value(ScoringMetric::Total), 17.0);
        assert_eq!(stats.metric_value(ScoringMetric::Average), 5.6667);
        assert_eq!(stats.metric_value(ScoringMetric::BestFinish), 1.0);
        assert_eq!(stats.metric_value(ScoringMetric::WorstFinish), 6.0);
    }

    #[test]
    fn test_event_result_row_deserialize_missing_fields() {
        let row: EventResultRow = serde_json::from_str(r#"{"team_id":"t1","position":2}"#).unwrap();
        assert_eq!(row.team_id.as_str(), "t1");
        assert_eq!(row.result, None);
        assert_eq!(row.position, Some(2));
    }
}
