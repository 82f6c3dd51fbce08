//! Ranking of scored teams.
//!
//! Teams are sorted by an [`OrderingSpec`], teams without any result are
//! moved to the bottom, then ranks are assigned.

mod ordering;

pub use ordering::*;

use chrono::Utc;
use tracing::{debug, info};

use crate::calculate::{is_textual_zero, standing_text};
use crate::models::{ScoringMetric, SportConfig, Standings, TeamStatistics};
use crate::scope::ScopeRequest;

/// Caller metrics followed by the sport default, without repeats.
pub fn active_metrics(requested: &[ScoringMetric], sport: &SportConfig) -> Vec<ScoringMetric> {
    let mut metrics: Vec<ScoringMetric> = Vec::with_capacity(requested.len() + 1);
    for metric in requested.iter().copied().chain(sport.default_metric) {
        if !metrics.contains(&metric) {
            metrics.push(metric);
        }
    }
    metrics
}

/// A team has played when any active metric shows a non-zero value.
pub fn has_results(stats: &TeamStatistics, metrics: &[ScoringMetric]) -> bool {
    metrics
        .iter()
        .any(|&metric| !is_textual_zero(&standing_text(stats, metric)))
}

/// Move teams without results after every team with results.
///
/// Relative order inside both groups is kept.
pub fn demote_teams_without_results(
    sorted: Vec<TeamStatistics>,
    metrics: &[ScoringMetric],
) -> Vec<TeamStatistics> {
    let (mut played, not_played): (Vec<_>, Vec<_>) = sorted
        .into_iter()
        .partition(|stats| has_results(stats, metrics));

    debug!(
        played = played.len(),
        not_played = not_played.len(),
        "Demoted teams without results"
    );
    played.extend(not_played);
    played
}

/// Sort by `spec`, demote teams without results and assign ranks.
pub fn rank_with_spec(
    mut statistics: Vec<TeamStatistics>,
    spec: &OrderingSpec,
    metrics: &[ScoringMetric],
) -> Vec<TeamStatistics> {
    statistics.sort_by(|a, b| spec.compare(a, b));

    let mut ranked = demote_teams_without_results(statistics, metrics);

    let total = ranked.len() as u32;
    for (i, stats) in ranked.iter_mut().enumerate() {
        stats.rank = i as u32 + 1;
        stats.total_teams = total;
    }
    ranked
}

/// Order and rank scored teams for the requested metrics.
pub fn rank_teams(
    statistics: Vec<TeamStatistics>,
    requested: &[ScoringMetric],
    sport: &SportConfig,
) -> Vec<TeamStatistics> {
    let metrics = active_metrics(requested, sport);
    let spec = OrderingSpec::build(&metrics, sport.points_rank_ascending);
    info!(teams = statistics.len(), order_by = %spec, "Ranking teams");

    rank_with_spec(statistics, &spec, &metrics)
}

/// Rank scored teams and wrap them in a timestamped snapshot.
pub fn build_standings(
    request: &ScopeRequest,
    statistics: Vec<TeamStatistics>,
    requested: &[ScoringMetric],
    sport: &SportConfig,
) -> Standings {
    let metrics = active_metrics(requested, sport);
    let spec = OrderingSpec::build(&metrics, sport.points_rank_ascending);
    info!(
        scope = %request.scope,
        entity_id = %request.entity_id,
        teams = statistics.len(),
        order_by = %spec,
        "Building standings"
    );

    let teams = rank_with_spec(statistics, &spec, &metrics);
    Standings {
        scope: request.scope,
        entity_id: request.entity_id.clone(),
        computed_at: Utc::now(),
        metrics,
        order_by: spec.to_string(),
        time_based: sport.shows_durations(),
        teams,
    }
}
