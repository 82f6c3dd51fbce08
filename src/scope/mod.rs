//! Ranking scopes and the declarative filters they select.
//!
//! A scope names the entity whose teams are ranked. The engine never builds
//! queries itself: [`ScopeRequest::filter`] describes which teams and which
//! event rows belong to the scope, and the storage collaborator applies it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StandingsError;
use crate::models::{EntityId, TeamId};

/// Division id used for waitlisted teams.
pub const WAITLIST_DIVISION_ID: &str = "0";

/// Entity whose teams are being ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    Sport,
    SportWithoutWaitlist,
    League,
    LeagueWaitlist,
    LeagueWithoutWaitlist,
    Division,
    Team,
    Group,
    SportEventTournament,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Sport => "sport",
            Scope::SportWithoutWaitlist => "sport-without-waitlist",
            Scope::League => "league",
            Scope::LeagueWaitlist => "league-waitlist",
            Scope::LeagueWithoutWaitlist => "league-without-waitlist",
            Scope::Division => "division",
            Scope::Team => "team",
            Scope::Group => "group",
            Scope::SportEventTournament => "sport-event-tournament",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scope {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "sport" => Ok(Scope::Sport),
            "sport-without-waitlist" => Ok(Scope::SportWithoutWaitlist),
            "league" => Ok(Scope::League),
            "league-waitlist" => Ok(Scope::LeagueWaitlist),
            "league-without-waitlist" => Ok(Scope::LeagueWithoutWaitlist),
            "division" => Ok(Scope::Division),
            "team" => Ok(Scope::Team),
            "group" => Ok(Scope::Group),
            "sport-event-tournament" | "tournament" => Ok(Scope::SportEventTournament),
            _ => Err(StandingsError::UnsupportedScope(s.to_string())),
        }
    }
}

/// Which waitlisted teams a league/sport scope keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistRule {
    Include,
    Exclude,
    Only,
}

impl WaitlistRule {
    /// Check a team's division id against the rule.
    pub fn admits(&self, division_id: &str) -> bool {
        let waitlisted = division_id == WAITLIST_DIVISION_ID;
        match self {
            WaitlistRule::Include => true,
            WaitlistRule::Exclude => !waitlisted,
            WaitlistRule::Only => waitlisted,
        }
    }
}

/// Teams belonging to a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TeamFilter {
    /// Teams in any league of the sport
    Sport {
        sport_id: EntityId,
        waitlist: WaitlistRule,
    },
    League {
        league_id: EntityId,
        waitlist: WaitlistRule,
    },
    Division { division_id: EntityId },
    Team { team_id: TeamId },
    /// Members of a group
    Group { group_id: EntityId },
    /// An explicit team list
    Teams { team_ids: Vec<TeamId> },
}

/// Event rows counted for a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Only results from teams whose league is active
    pub active_leagues_only: bool,

    /// Only events of this tournament
    pub tournament_id: Option<EntityId>,

    /// Only events of this round (requires a tournament)
    pub round: Option<u32>,
}

impl EventFilter {
    fn any() -> Self {
        Self {
            active_leagues_only: false,
            tournament_id: None,
            round: None,
        }
    }
}

/// Declarative description handed to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFilter {
    pub teams: TeamFilter,
    pub events: EventFilter,
}

/// A ranking request for one scope entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRequest {
    pub scope: Scope,
    pub entity_id: EntityId,

    /// Teams taking part, for tournament scopes
    #[serde(default)]
    pub tournament_teams: Vec<TeamId>,

    /// Restrict tournament standings to one round; 0 means all rounds
    #[serde(default)]
    pub round: u32,
}

impl ScopeRequest {
    pub fn new(scope: Scope, entity_id: impl Into<EntityId>) -> Self {
        Self {
            scope,
            entity_id: entity_id.into(),
            tournament_teams: Vec::new(),
            round: 0,
        }
    }

    /// Builder method to set the tournament team list.
    pub fn with_tournament_teams(mut self, teams: Vec<TeamId>) -> Self {
        self.tournament_teams = teams;
        self
    }

    /// Builder method to restrict to one tournament round.
    pub fn with_round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    /// Describe the teams and event rows this request covers.
    pub fn filter(&self) -> ScopeFilter {
        let id = self.entity_id.clone();
        match self.scope {
            Scope::Sport | Scope::SportWithoutWaitlist => {
                let waitlist = if self.scope == Scope::Sport {
                    WaitlistRule::Include
                } else {
                    WaitlistRule::Exclude
                };
                ScopeFilter {
                    teams: TeamFilter::Sport {
                        sport_id: id,
                        waitlist,
                    },
                    events: EventFilter {
                        active_leagues_only: true,
                        ..EventFilter::any()
                    },
                }
            }
            Scope::League | Scope::LeagueWaitlist | Scope::LeagueWithoutWaitlist => {
                let waitlist = match self.scope {
                    Scope::LeagueWaitlist => WaitlistRule::Only,
                    Scope::LeagueWithoutWaitlist => WaitlistRule::Exclude,
                    _ => WaitlistRule::Include,
                };
                ScopeFilter {
                    teams: TeamFilter::League {
                        league_id: id,
                        waitlist,
                    },
                    events: EventFilter::any(),
                }
            }
            Scope::Division => ScopeFilter {
                teams: TeamFilter::Division { division_id: id },
                events: EventFilter::any(),
            },
            Scope::Team => ScopeFilter {
                teams: TeamFilter::Team { team_id: id },
                events: EventFilter::any(),
            },
            Scope::Group => ScopeFilter {
                teams: TeamFilter::Group { group_id: id },
                events: EventFilter::any(),
            },
            Scope::SportEventTournament => ScopeFilter {
                teams: TeamFilter::Teams {
                    team_ids: self.tournament_teams.clone(),
                },
                events: EventFilter {
                    active_leagues_only: false,
                    tournament_id: Some(id),
                    round: (self.round != 0).then_some(self.round),
                },
            },
        }
    }
}
