//! Standings: tally played games, rank with the tiebreaker chain, flag unresolved ties.

use crate::logic::tiebreak::{compare_chain, HeadToHeadTable};
use crate::models::{GameResult, GroupConfig, StandingsRow, TeamId};
use std::collections::HashMap;

/// Compute the ranked standings for one group.
///
/// 1. Tally every played game whose two sides are both in `config.teams`.
/// 2. Build the head-to-head table once for each tied group.
/// 3. Stable sort by points, then by `config.tiebreaker_order`.
/// 4. Mark the first `qualifying_spots` rows as qualifying.
/// 5. Flag adjacent equal-points pairs the chain cannot separate.
///
/// Rows come back best to worst, one per team. Teams level on every key keep
/// their `config.teams` order.
pub fn compute_standings(config: &GroupConfig, games: &[GameResult]) -> Vec<StandingsRow> {
    let mut rows = tally(config, games);

    let table = HeadToHeadTable::build(&rows, games, config.head_to_head_scope);
    let order = &config.tiebreaker_order;
    rows.sort_by(|a, b| {
        b.pts
            .cmp(&a.pts)
            .then_with(|| compare_chain(order, a, b, &table))
    });

    let spots = config.qualifying_spots.min(rows.len());
    for row in rows.iter_mut().take(spots) {
        row.qualifies = true;
    }

    flag_unresolved_ties(&mut rows, config, &table);
    rows
}

/// One row per team with gp/w/l/t/gf/ga/pts/diff filled in, in `config.teams` order.
pub fn tally(config: &GroupConfig, games: &[GameResult]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = config.teams.iter().map(StandingsRow::new).collect();
    let index: HashMap<TeamId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (r.team_id, i))
        .collect();

    for game in games {
        let Some((home, away)) = game.final_score() else {
            continue;
        };
        // Games against teams outside this group do not count here.
        let (Some(&h), Some(&a)) = (index.get(&game.home_team), index.get(&game.away_team)) else {
            continue;
        };
        if h == a {
            log::warn!("Ignoring game of team {} against itself", game.home_team);
            continue;
        }
        rows[h].record(home, away);
        rows[a].record(away, home);
    }

    for row in &mut rows {
        row.finish();
    }
    rows
}

/// Set `tied_unresolved` on both rows of every adjacent pair that is level on points
/// and on every configured tiebreaker, as long as at least one of them has played.
fn flag_unresolved_ties(rows: &mut [StandingsRow], config: &GroupConfig, table: &HeadToHeadTable) {
    let order = &config.tiebreaker_order;
    for i in 1..rows.len() {
        let (above, below) = (&rows[i - 1], &rows[i]);
        if above.pts != below.pts || (above.gp == 0 && below.gp == 0) {
            continue;
        }
        if compare_chain(order, above, below, table).is_eq() {
            log::debug!(
                "Unresolved tie between {} and {} on {} pts",
                above.name,
                below.name,
                above.pts
            );
            rows[i - 1].tied_unresolved = true;
            rows[i].tied_unresolved = true;
        }
    }
}
