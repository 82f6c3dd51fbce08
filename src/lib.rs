//! # Event Standings
//!
//! Season standings for event-based sports (races, tournaments, meets).
//!
//! ## Architecture
//!
//! - **models**: Core data structures (team statistics, sport settings, metric catalog)
//! - **calculate**: Result aggregation, drop policies and point totals
//! - **ranking**: Multi-key ordering, no-result demotion and rank assignment
//! - **scope**: Ranking scopes and the filters they describe
//! - **storage**: JSONL data store standing in for the external query layer
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scope;
pub mod storage;

pub use error::StandingsError;
pub use models::*;

use calculate::compute_team_statistics;
use ranking::build_standings;
use scope::ScopeRequest;
use storage::ResolvedScope;

/// Score and rank every team of a resolved scope.
pub fn compute_standings(
    request: &ScopeRequest,
    resolved: ResolvedScope,
    metrics: &[ScoringMetric],
) -> Standings {
    let statistics = compute_team_statistics(resolved.teams, &resolved.rows, &resolved.sport);
    build_standings(request, statistics, metrics, &resolved.sport)
}
