//! Season points with drop-lowest/drop-highest policies.

use tracing::debug;

use crate::models::{SportConfig, TeamStatistics};

/// Drop counts actually applied to a team.
///
/// Teams with no more events than the configured drops keep everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveDrops {
    pub lowest: usize,
    pub highest: usize,
}

impl EffectiveDrops {
    pub fn for_events(number_of_events: usize, sport: &SportConfig) -> Self {
        let lowest = sport.drop_lowest as usize;
        let highest = sport.drop_highest as usize;
        if number_of_events > lowest + highest {
            Self { lowest, highest }
        } else {
            Self {
                lowest: 0,
                highest: 0,
            }
        }
    }

    /// Events that count towards the total.
    pub fn counted(&self, number_of_events: usize) -> usize {
        number_of_events - self.lowest - self.highest
    }
}

/// Points for a finishing position; positions outside the table score 0.
pub fn points_for_position(position: i32, table: &[f64]) -> f64 {
    if position >= 1 && (position as usize) <= table.len() {
        table[position as usize - 1]
    } else {
        0.0
    }
}

/// Compute totals, average and best/worst finish for one team.
pub fn score_team(stats: &mut TeamStatistics, sport: &SportConfig) {
    stats.positions.sort();
    if let (Some(&best), Some(&worst)) = (stats.positions.first(), stats.positions.last()) {
        stats.best_finish = best;
        stats.worst_finish = worst;
    }

    let events = stats.number_of_events();
    let drops = EffectiveDrops::for_events(events, sport);
    let counted_range = drops.highest..events - drops.lowest;

    // Folded from +0.0; an empty f64 sum is -0.0 and renders as "-0".
    stats.total_points = if sport.use_actual_result {
        if stats.results.len() < counted_range.end {
            debug!(
                team_id = %stats.team_id,
                results = stats.results.len(),
                events,
                "Fewer results than positions, missing results count as 0"
            );
        }
        counted_range
            .filter_map(|i| stats.results.get(i))
            .fold(0.0, |total, result| total + result)
    } else {
        stats.positions[counted_range]
            .iter()
            .map(|&position| points_for_position(position, &sport.assigned_point_values))
            .fold(0.0, |total, points| total + points)
    };

    let counted = drops.counted(events);
    stats.average_points = if counted == 0 {
        0.0
    } else {
        stats.total_points / counted as f64
    };
}
