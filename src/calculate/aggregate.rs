//! Folding raw event rows into per-team records.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{EventResultRow, TeamBootstrap, TeamId, TeamStatistics};

/// Per-team records for one ranking request, in scope order.
#[derive(Debug, Default)]
pub struct TeamStatisticsSet {
    records: Vec<TeamStatistics>,
    index: HashMap<TeamId, usize>,
}

impl TeamStatisticsSet {
    /// Create one empty record per team. Duplicate ids keep the first team.
    pub fn new(teams: impl IntoIterator<Item = TeamBootstrap>) -> Self {
        let mut set = Self::default();
        for team in teams {
            if set.index.contains_key(&team.team_id) {
                warn!(team_id = %team.team_id, "Duplicate team in scope, keeping first");
                continue;
            }
            set.index.insert(team.team_id.clone(), set.records.len());
            set.records.push(TeamStatistics::new(team));
        }
        set
    }

    /// Fold one event row into its team's record.
    ///
    /// Returns false when the team is not in scope and the row was dropped.
    pub fn record(&mut self, row: &EventResultRow) -> bool {
        let Some(&slot) = self.index.get(&row.team_id) else {
            debug!(team_id = %row.team_id, "Dropping result for team outside scope");
            return false;
        };

        let stats = &mut self.records[slot];
        if let Some(result) = row.result {
            stats.results.push(result);
        }
        if let Some(position) = row.position {
            stats.positions.push(position);
        }
        true
    }

    pub fn get(&self, team_id: &TeamId) -> Option<&TeamStatistics> {
        self.index.get(team_id).map(|&slot| &self.records[slot])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TeamStatistics> {
        self.records.iter_mut()
    }

    pub fn into_vec(self) -> Vec<TeamStatistics> {
        self.records
    }
}

/// Build the per-team records and fold every row into them.
pub fn aggregate<'a>(
    teams: impl IntoIterator<Item = TeamBootstrap>,
    rows: impl IntoIterator<Item = &'a EventResultRow>,
) -> TeamStatisticsSet {
    let mut set = TeamStatisticsSet::new(teams);
    let mut dropped = 0usize;
    for row in rows {
        if !set.record(row) {
            dropped += 1;
        }
    }
    debug!(teams = set.len(), dropped, "Aggregated event results");
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<TeamBootstrap> {
        vec![
            TeamBootstrap::new("a", "Alpha"),
            TeamBootstrap::new("b", "Bravo"),
        ]
    }

    #[test]
    fn test_rows_append_in_arrival_order() {
        let rows = vec![
            EventResultRow::new("a", Some(5.0), Some(2)),
            EventResultRow::new("b", Some(1.0), Some(1)),
            EventResultRow::new("a", Some(8.0), Some(1)),
        ];

        let set = aggregate(teams(), &rows);
        let alpha = set.get(&TeamId::from("a")).unwrap();
        assert_eq!(alpha.results, vec![5.0, 8.0]);
        assert_eq!(alpha.positions, vec![2, 1]);

        let bravo = set.get(&TeamId::from("b")).unwrap();
        assert_eq!(bravo.results, vec![1.0]);
    }

    #[test]
    fn test_result_and_position_append_independently() {
        let rows = vec![
            EventResultRow::new("a", Some(5.0), None),
            EventResultRow::new("a", None, Some(3)),
            EventResultRow::new("a", None, None),
        ];

        let set = aggregate(teams(), &rows);
        let alpha = set.get(&TeamId::from("a")).unwrap();
        assert_eq!(alpha.results, vec![5.0]);
        assert_eq!(alpha.positions, vec![3]);
        assert_eq!(alpha.number_of_events(), 1);
    }

    #[test]
    fn test_rows_for_unknown_teams_are_dropped() {
        let mut set = TeamStatisticsSet::new(teams());
        assert!(!set.record(&EventResultRow::new("zulu", Some(1.0), Some(1))));
        assert!(set.record(&EventResultRow::new("b", Some(1.0), Some(1))));

        assert_eq!(set.len(), 2);
        assert!(set.get(&TeamId::from("zulu")).is_none());
    }

    #[test]
    fn test_duplicate_team_keeps_first() {
        let set = TeamStatisticsSet::new(vec![
            TeamBootstrap::new("a", "Alpha"),
            TeamBootstrap::new("a", "Alpha Again"),
        ]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&TeamId::from("a")).unwrap().team_name, "Alpha");
    }

    #[test]
    fn test_scope_order_is_preserved() {
        let set = aggregate(teams(), std::iter::empty::<&EventResultRow>());
        let names: Vec<_> = set.into_vec().into_iter().map(|t| t.team_name).collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
    }
}
