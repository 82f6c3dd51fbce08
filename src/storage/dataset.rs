//! In-memory view of the data store and scope resolution.

use std::collections::HashMap;

use tracing::{info, warn};

use super::{
    DivisionRecord, EntityType, EventRecord, EventResultRecord, GroupTeamRecord, JsonlReader,
    LeagueRecord, SportRecord, StorageConfig, TeamRecord, TournamentRecord,
};
use crate::error::StandingsError;
use crate::models::{EntityId, EventResultRow, SportConfig, TeamBootstrap, TeamId};
use crate::scope::{EventFilter, Scope, ScopeRequest, TeamFilter};

/// Everything the engine needs for one scope.
#[derive(Debug, Clone)]
pub struct ResolvedScope {
    pub sport: SportConfig,
    pub teams: Vec<TeamBootstrap>,
    pub rows: Vec<EventResultRow>,
}

/// All stored entities, indexed by id.
#[derive(Debug, Default)]
pub struct Dataset {
    sports: HashMap<EntityId, SportRecord>,
    leagues: HashMap<EntityId, LeagueRecord>,
    divisions: HashMap<EntityId, DivisionRecord>,
    teams: Vec<TeamRecord>,
    group_teams: Vec<GroupTeamRecord>,
    tournaments: HashMap<EntityId, TournamentRecord>,
    events: HashMap<EntityId, EventRecord>,
    results: Vec<EventResultRecord>,
}

/// Records stored under a unique id.
trait Keyed {
    fn key(&self) -> &EntityId;
}

macro_rules! keyed_by_id {
    ($($record:ty),*) => {
        $(impl Keyed for $record {
            fn key(&self) -> &EntityId {
                &self.id
            }
        })*
    };
}

keyed_by_id!(SportRecord, LeagueRecord, DivisionRecord, TournamentRecord, EventRecord);

fn index_by_id<T: Keyed>(records: Vec<T>) -> HashMap<EntityId, T> {
    records.into_iter().map(|r| (r.key().clone(), r)).collect()
}

impl Dataset {
    /// Read every entity file under the data directory.
    pub fn load(config: &StorageConfig) -> Result<Self, StandingsError> {
        let dataset = Self {
            sports: index_by_id(JsonlReader::for_entity(config, EntityType::Sport).read_all()?),
            leagues: index_by_id(JsonlReader::for_entity(config, EntityType::League).read_all()?),
            divisions: index_by_id(JsonlReader::for_entity(config, EntityType::Division).read_all()?),
            teams: JsonlReader::for_entity(config, EntityType::Team).read_all()?,
            group_teams: JsonlReader::for_entity(config, EntityType::GroupTeam).read_all()?,
            tournaments: index_by_id(JsonlReader::for_entity(config, EntityType::Tournament).read_all()?),
            events: index_by_id(JsonlReader::for_entity(config, EntityType::Event).read_all()?),
            results: JsonlReader::for_entity(config, EntityType::EventResult).read_all()?,
        };

        info!(
            sports = dataset.sports.len(),
            leagues = dataset.leagues.len(),
            teams = dataset.teams.len(),
            results = dataset.results.len(),
            "Loaded dataset from {:?}",
            config.data_dir
        );
        Ok(dataset)
    }

    fn league(&self, id: &EntityId) -> Result<&LeagueRecord, StandingsError> {
        self.leagues.get(id).ok_or_else(|| not_found("League", id))
    }

    /// Sport id the scope entity belongs to; `None` for groups.
    fn scope_sport_id(&self, request: &ScopeRequest) -> Result<Option<EntityId>, StandingsError> {
        let id = &request.entity_id;
        let sport_id = match request.scope {
            Scope::Sport | Scope::SportWithoutWaitlist => {
                if !self.sports.contains_key(id) {
                    return Err(not_found("Sport", id));
                }
                id.clone()
            }
            Scope::League | Scope::LeagueWaitlist | Scope::LeagueWithoutWaitlist => {
                self.league(id)?.sport_id.clone()
            }
            Scope::Division => self
                .divisions
                .get(id)
                .ok_or_else(|| not_found("Division", id))?
                .sport_id
                .clone(),
            Scope::Team => self
                .teams
                .iter()
                .find(|t| &t.id == id)
                .ok_or_else(|| not_found("Team", id))?
                .sport_id
                .clone(),
            Scope::SportEventTournament => {
                let tournament = self
                    .tournaments
                    .get(id)
                    .ok_or_else(|| not_found("Tournament", id))?;
                self.league(&tournament.league_id)?.sport_id.clone()
            }
            Scope::Group => return Ok(None),
        };
        Ok(Some(sport_id))
    }

    fn sport_config(&self, request: &ScopeRequest) -> Result<SportConfig, StandingsError> {
        let Some(sport_id) = self.scope_sport_id(request)? else {
            return Ok(SportConfig::default());
        };
        match self.sports.get(&sport_id) {
            Some(sport) => sport.to_config(),
            None => {
                warn!(sport_id = %sport_id, "Sport not found, ranking without sport settings");
                Ok(SportConfig::default())
            }
        }
    }

    fn team_matches(&self, team: &TeamRecord, filter: &TeamFilter) -> bool {
        match filter {
            TeamFilter::Sport { sport_id, waitlist } => {
                waitlist.admits(team.division_id.as_str())
                    && self
                        .leagues
                        .get(&team.league_id)
                        .is_some_and(|l| &l.sport_id == sport_id)
            }
            TeamFilter::League {
                league_id,
                waitlist,
            } => &team.league_id == league_id && waitlist.admits(team.division_id.as_str()),
            TeamFilter::Division { division_id } => &team.division_id == division_id,
            TeamFilter::Team { team_id } => &team.id == team_id,
            TeamFilter::Group { group_id } => self
                .group_teams
                .iter()
                .any(|g| &g.group_id == group_id && g.team_id == team.id),
            TeamFilter::Teams { team_ids } => team_ids.contains(&team.id),
        }
    }

    fn bootstrap(&self, team: &TeamRecord) -> TeamBootstrap {
        let league = self.leagues.get(&team.league_id);
        let ladder_active = league.is_some_and(|l| l.ladder_scheduling);

        TeamBootstrap {
            team_id: team.id.clone(),
            name: team.name.clone(),
            division_name: self
                .divisions
                .get(&team.division_id)
                .map(|d| d.name.clone())
                .unwrap_or_default(),
            league_name: league.map(|l| l.name.clone()).unwrap_or_default(),
            sport_name: self
                .sports
                .get(&team.sport_id)
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            is_replaced: team.replaced_by.is_some(),
            ladder_rank: if ladder_active {
                team.ladder_rank.unwrap_or(0)
            } else {
                0
            },
            active_team: team.active_team,
            league_allow_team_join: league.is_some_and(|l| l.allow_team_join),
            playoff_best_rank: team.playoff_best_rank.unwrap_or(0),
            created_at: team.created_at,
        }
    }

    fn result_matches(
        &self,
        result: &EventResultRecord,
        team: &TeamRecord,
        filter: &EventFilter,
    ) -> bool {
        if filter.active_leagues_only
            && !self.leagues.get(&team.league_id).is_some_and(|l| l.active)
        {
            return false;
        }
        if let Some(tournament_id) = &filter.tournament_id {
            let Some(event) = self.events.get(&result.event_id) else {
                return false;
            };
            if event.tournament_id.as_ref() != Some(tournament_id) {
                return false;
            }
            if filter.round.is_some_and(|round| event.round != round) {
                return false;
            }
        }
        true
    }

    /// Resolve sport settings, teams and event rows for a scope.
    pub fn resolve(&self, request: &ScopeRequest) -> Result<ResolvedScope, StandingsError> {
        let sport = self.sport_config(request)?;
        let filter = request.filter();

        let in_scope: Vec<&TeamRecord> = self
            .teams
            .iter()
            .filter(|t| self.team_matches(t, &filter.teams))
            .collect();
        let by_id: HashMap<&TeamId, &TeamRecord> = in_scope.iter().map(|t| (&t.id, *t)).collect();

        let rows: Vec<EventResultRow> = self
            .results
            .iter()
            .filter(|r| {
                by_id
                    .get(&r.team_id)
                    .is_some_and(|team| self.result_matches(r, team, &filter.events))
            })
            .map(EventResultRecord::to_row)
            .collect();

        let teams: Vec<TeamBootstrap> = in_scope.iter().map(|t| self.bootstrap(t)).collect();

        info!(
            scope = %request.scope,
            entity_id = %request.entity_id,
            teams = teams.len(),
            rows = rows.len(),
            "Resolved scope"
        );
        Ok(ResolvedScope { sport, teams, rows })
    }
}

fn not_found(kind: &'static str, id: &EntityId) -> StandingsError {
    StandingsError::EntityNotFound {
        kind,
        id: id.to_string(),
    }
}
