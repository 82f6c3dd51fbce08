//! Stored entity records.
//!
//! These mirror what the external store keeps; the engine only sees the
//! resolved [`SportConfig`], [`TeamBootstrap`] and [`EventResultRow`] values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StandingsError;
use crate::models::{
    lookup_metric, parse_point_values, DivisionId, EntityId, EventId, EventResultRow, LeagueId,
    SportConfig, SportId, TeamId,
};

/// Result type code for time-based sports.
pub const TIME_RESULT_TYPE: u32 = 0;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportRecord {
    pub id: SportId,
    pub name: String,

    /// Lower points rank better
    #[serde(default)]
    pub point_ranking: bool,

    #[serde(default)]
    pub drop_lowest: u32,

    #[serde(default)]
    pub drop_highest: u32,

    #[serde(default)]
    pub use_actual_result: bool,

    /// Comma-separated point table, e.g. `"10,7,5,3,1"`
    #[serde(default)]
    pub assigned_point_values: String,

    #[serde(default)]
    pub result_type: u32,

    /// Default standings metric code
    #[serde(default)]
    pub standings: Option<String>,
}

impl SportRecord {
    /// Resolve the scoring configuration for this sport.
    pub fn to_config(&self) -> Result<SportConfig, StandingsError> {
        Ok(SportConfig {
            name: self.name.clone(),
            points_rank_ascending: self.point_ranking,
            drop_lowest: self.drop_lowest,
            drop_highest: self.drop_highest,
            use_actual_result: self.use_actual_result,
            assigned_point_values: parse_point_values(&self.assigned_point_values)?,
            is_time_based: self.use_actual_result && self.result_type == TIME_RESULT_TYPE,
            default_metric: self.standings.as_deref().map(lookup_metric),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueRecord {
    pub id: LeagueId,
    pub name: String,
    pub sport_id: SportId,

    #[serde(default = "default_true")]
    pub active: bool,

    #[serde(default)]
    pub ladder_scheduling: bool,

    #[serde(default)]
    pub allow_team_join: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionRecord {
    pub id: DivisionId,
    pub name: String,
    pub league_id: LeagueId,
    pub sport_id: SportId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub league_id: LeagueId,

    /// `"0"` for waitlisted teams
    pub division_id: DivisionId,
    pub sport_id: SportId,

    /// Team that took this team's place (forfeit or bye)
    #[serde(default)]
    pub replaced_by: Option<TeamId>,

    #[serde(default)]
    pub ladder_rank: Option<u32>,

    #[serde(default = "default_true")]
    pub active_team: bool,

    #[serde(default)]
    pub playoff_best_rank: Option<u32>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupTeamRecord {
    pub group_id: EntityId,
    pub team_id: TeamId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub id: EntityId,
    pub league_id: LeagueId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,

    #[serde(default)]
    pub tournament_id: Option<EntityId>,

    #[serde(default)]
    pub round: u32,
}

/// A team's stored result in one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResultRecord {
    pub event_id: EventId,
    pub team_id: TeamId,

    #[serde(default)]
    pub result: Option<f64>,

    #[serde(default)]
    pub position: Option<i32>,
}

impl EventResultRecord {
    pub fn to_row(&self) -> EventResultRow {
        EventResultRow {
            team_id: self.team_id.clone(),
            result: self.result,
            position: self.position,
        }
    }
}
