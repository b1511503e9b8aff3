//! Tie explanations for display: which tiebreaker put one team above its neighbour.

use crate::logic::tiebreak::{compare, pairwise_head_to_head, row_value, HeadToHeadTable};
use crate::models::{GameResult, StandingsRow, TieResolution, Tiebreaker};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Explain every adjacent pair of equal-points teams in `rows`.
///
/// Head-to-head here only counts the two teams' direct games. When three or more
/// teams share the same points, standings used the whole tied group's games, so an
/// explanation can name head-to-head for a pair the sort actually split on group
/// results. Pairs no tiebreaker separates are left out.
pub fn resolve_ties(
    rows: &[StandingsRow],
    games: &[GameResult],
    order: &[Tiebreaker],
) -> Vec<TieResolution> {
    rows.windows(2)
        .filter(|pair| pair[0].pts == pair[1].pts && (pair[0].gp > 0 || pair[1].gp > 0))
        .filter_map(|pair| resolve_pair(&pair[0], &pair[1], games, order))
        .collect()
}

fn resolve_pair(
    upper: &StandingsRow,
    lower: &StandingsRow,
    games: &[GameResult],
    order: &[Tiebreaker],
) -> Option<TieResolution> {
    let no_table = HeadToHeadTable::default();
    let mut tied_values = BTreeMap::new();

    for &tb in order {
        let (ordering, upper_value, lower_value) = match tb {
            Tiebreaker::HeadToHead => {
                let (pu, pl) = pairwise_head_to_head(upper.team_id, lower.team_id, games);
                (pl.cmp(&pu), i64::from(pu), i64::from(pl))
            }
            _ => (
                compare(tb, upper, lower, &no_table),
                row_value(tb, upper).unwrap_or_default(),
                row_value(tb, lower).unwrap_or_default(),
            ),
        };

        if ordering == Ordering::Equal {
            tied_values.insert(tb.label().to_string(), upper_value);
            continue;
        }

        let (ahead, behind, ahead_value, behind_value) = if ordering == Ordering::Less {
            (upper, lower, upper_value, lower_value)
        } else {
            (lower, upper, lower_value, upper_value)
        };
        let detail = format!(
            "{} ahead of {} on {}: {} vs {}",
            ahead.name,
            behind.name,
            tb.label().to_lowercase(),
            format_value(tb, ahead_value),
            format_value(tb, behind_value),
        );
        return Some(TieResolution {
            teams_involved: (upper.team_id, lower.team_id),
            resolved_by: tb,
            detail,
            tied_values,
        });
    }
    None
}

fn format_value(tb: Tiebreaker, value: i64) -> String {
    match tb {
        Tiebreaker::GoalDifferential => format!("{:+}", value),
        Tiebreaker::HeadToHead if value == 1 => "1 pt".to_string(),
        Tiebreaker::HeadToHead => format!("{} pts", value),
        _ => value.to_string(),
    }
}
