//! Statistics calculation engine.
//!
//! Turns raw per-event rows into scored per-team records:
//! - Aggregation of results and finishing positions per team
//! - Season points with drop-lowest/drop-highest policies
//! - Display formatting of metric values

mod aggregate;
mod format;
mod scoring;

pub use aggregate::*;
pub use format::*;
pub use scoring::*;

use tracing::info;

use crate::models::{EventResultRow, SportConfig, TeamBootstrap, TeamStatistics};

/// Aggregate and score every team in scope.
///
/// The result is unordered (scope order); rank fields are left unset.
pub fn compute_team_statistics(
    scope_teams: impl IntoIterator<Item = TeamBootstrap>,
    rows: &[EventResultRow],
    sport: &SportConfig,
) -> Vec<TeamStatistics> {
    let mut set = aggregate(scope_teams, rows);
    for stats in set.iter_mut() {
        score_team(stats, sport);
    }

    info!(
        teams = set.len(),
        rows = rows.len(),
        sport = %sport.name,
        "Computed team statistics"
    );
    set.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;

    #[test]
    fn test_compute_team_statistics_end_to_end() {
        let sport = SportConfig::default().with_point_values(vec![10.0, 7.0, 5.0, 3.0, 1.0]);
        let teams = vec![
            TeamBootstrap::new("a", "Alpha"),
            TeamBootstrap::new("b", "Bravo"),
            TeamBootstrap::new("c", "Charlie"),
        ];
        let rows = vec![
            EventResultRow::new("a", Some(12.0), Some(2)),
            EventResultRow::new("b", Some(15.0), Some(1)),
            EventResultRow::new("a", Some(20.0), Some(1)),
            EventResultRow::new("a", Some(1.0), Some(6)),
            EventResultRow::new("x", Some(99.0), Some(1)),
        ];

        let stats = compute_team_statistics(teams, &rows, &sport);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].team_id, TeamId::from("a"));
        assert_eq!(stats[0].total_points, 17.0);
        assert_eq!(stats[0].best_finish, 1);
        assert_eq!(stats[0].worst_finish, 6);
        assert_eq!(stats[1].total_points, 10.0);
        assert_eq!(stats[2].number_of_events(), 0);
        assert_eq!(stats[2].total_points, 0.0);
        assert!(stats.iter().all(|s| s.rank == 0));
    }
}
