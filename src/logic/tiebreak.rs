//! Tiebreakers: the pairwise comparison of two teams level on points.
//!
//! Every comparator returns `Ordering::Less` when `a` should rank ahead of `b`,
//! so they plug straight into `sort_by`.

use crate::models::{GameResult, HeadToHeadScope, StandingsRow, TeamId, Tiebreaker};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Head-to-head points earned inside each tied group, computed once per standings run.
///
/// A tied group is every team sharing the scope key (points, or points and wins).
/// Only games between two members of the same group count: 2 for a win, 1 each for a tie.
#[derive(Clone, Debug, Default)]
pub struct HeadToHeadTable {
    scope: HeadToHeadScope,
    keys: HashMap<TeamId, (u32, u32)>,
    points: HashMap<TeamId, u32>,
}

impl HeadToHeadTable {
    /// Build the table from tallied rows (pts and w must be final) and the raw games.
    pub fn build(rows: &[StandingsRow], games: &[GameResult], scope: HeadToHeadScope) -> Self {
        let keys: HashMap<TeamId, (u32, u32)> = rows
            .iter()
            .map(|r| (r.team_id, group_key(r, scope)))
            .collect();
        let mut points: HashMap<TeamId, u32> = HashMap::new();

        for game in games {
            let Some((home, away)) = game.final_score() else {
                continue;
            };
            let (Some(home_key), Some(away_key)) =
                (keys.get(&game.home_team), keys.get(&game.away_team))
            else {
                continue;
            };
            if home_key != away_key || game.home_team == game.away_team {
                continue;
            }
            let (home_pts, away_pts) = game_points(home, away);
            *points.entry(game.home_team).or_default() += home_pts;
            *points.entry(game.away_team).or_default() += away_pts;
        }

        Self { scope, keys, points }
    }

    pub fn scope(&self) -> HeadToHeadScope {
        self.scope
    }

    /// Points `team` earned against the rest of its tied group.
    pub fn points(&self, team: TeamId) -> u32 {
        self.points.get(&team).copied().unwrap_or(0)
    }

    /// Teams in different tied groups are ordered by the group key itself
    /// (higher points, then more wins); inside a group by mini-table points.
    fn compare(&self, a: &StandingsRow, b: &StandingsRow) -> Ordering {
        let key_a = self.keys.get(&a.team_id).copied().unwrap_or_else(|| group_key(a, self.scope));
        let key_b = self.keys.get(&b.team_id).copied().unwrap_or_else(|| group_key(b, self.scope));
        key_b
            .cmp(&key_a)
            .then_with(|| self.points(b.team_id).cmp(&self.points(a.team_id)))
    }
}

fn group_key(row: &StandingsRow, scope: HeadToHeadScope) -> (u32, u32) {
    match scope {
        HeadToHeadScope::Points => (row.pts, 0),
        HeadToHeadScope::PointsAndWins => (row.pts, row.w),
    }
}

/// Standings points for one game: 2 to the winner, 1 each for a tie.
fn game_points(home: u32, away: u32) -> (u32, u32) {
    match home.cmp(&away) {
        Ordering::Greater => (2, 0),
        Ordering::Less => (0, 2),
        Ordering::Equal => (1, 1),
    }
}

/// Compare two teams on a single tiebreaker.
pub fn compare(
    tiebreaker: Tiebreaker,
    a: &StandingsRow,
    b: &StandingsRow,
    head_to_head: &HeadToHeadTable,
) -> Ordering {
    match tiebreaker {
        Tiebreaker::Wins => b.w.cmp(&a.w),
        Tiebreaker::HeadToHead => head_to_head.compare(a, b),
        Tiebreaker::GoalDifferential => b.diff.cmp(&a.diff),
        Tiebreaker::GoalsAllowed => a.ga.cmp(&b.ga),
        Tiebreaker::GoalsFor => b.gf.cmp(&a.gf),
    }
}

/// Walk the tiebreaker order and return the first decisive comparison.
///
/// `Equal` means the whole chain leaves the pair level.
pub fn compare_chain(
    order: &[Tiebreaker],
    a: &StandingsRow,
    b: &StandingsRow,
    head_to_head: &HeadToHeadTable,
) -> Ordering {
    order
        .iter()
        .map(|&tb| compare(tb, a, b, head_to_head))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Points `a` and `b` took off each other in their direct games only.
///
/// Unlike [`HeadToHeadTable`] this ignores every other team on the same points.
pub fn pairwise_head_to_head(a: TeamId, b: TeamId, games: &[GameResult]) -> (u32, u32) {
    games
        .iter()
        .filter(|g| a != b && g.is_between(a, b))
        .filter_map(|g| {
            let (gf, ga) = g.score_for(a)?;
            Some(game_points(gf, ga))
        })
        .fold((0, 0), |(pa, pb), (x, y)| (pa + x, pb + y))
}

/// Value a tiebreaker looks at for one team, as shown in tie explanations.
///
/// Head-to-head has no single-row value; callers use [`pairwise_head_to_head`].
pub fn row_value(tiebreaker: Tiebreaker, row: &StandingsRow) -> Option<i64> {
    match tiebreaker {
        Tiebreaker::Wins => Some(i64::from(row.w)),
        Tiebreaker::HeadToHead => None,
        Tiebreaker::GoalDifferential => Some(row.diff),
        Tiebreaker::GoalsAllowed => Some(i64::try_from(row.ga).unwrap_or(i64::MAX)),
        Tiebreaker::GoalsFor => Some(i64::try_from(row.gf).unwrap_or(i64::MAX)),
    }
}
