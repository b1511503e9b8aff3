//! Qualification: decide which teams have clinched a spot, which are eliminated,
//! and which are still alive with games left to play.

use crate::models::{GroupConfig, QualificationRow, QualificationStatus, StandingsRow};

/// Games each team plays in a complete round robin of `config`.
pub fn expected_games(config: &GroupConfig) -> u32 {
    let opponents = u32::try_from(config.total_teams.saturating_sub(1)).unwrap_or(u32::MAX);
    opponents.saturating_mul(config.games_per_matchup)
}

/// Classify every team of an already sorted standings table.
///
/// `rows` must be in final standings order (as returned by `compute_standings`);
/// that order is authoritative for teams level on points with no games left.
///
/// Runs passes over the table in order until a pass changes nothing. A team is
/// locked once enough teams are provably below it that it cannot fall out of the
/// top `qualifying_spots`, and out once enough are provably above it. Each
/// decision can settle another team on a later pass.
///
/// Every rule only relies on facts later results cannot undo, so adding a played
/// game never moves a status back to alive or across. A team in an unresolved tie
/// is still settled on points alone; the standings order between two teams level
/// on points is trusted only once nobody still playing can finish on that level.
pub fn classify(rows: &[StandingsRow], config: &GroupConfig) -> Vec<QualificationRow> {
    let expected = expected_games(config);
    let mut out: Vec<QualificationRow> = rows
        .iter()
        .map(|r| {
            let games_remaining = expected.saturating_sub(r.gp);
            QualificationRow {
                standings: r.clone(),
                games_remaining,
                max_pts: r.pts.saturating_add(games_remaining.saturating_mul(2)),
                status: QualificationStatus::Alive,
            }
        })
        .collect();

    let all_done = out.iter().all(|r| r.games_remaining == 0);
    let spots = config.qualifying_spots;
    let needed_below = config.total_teams.saturating_sub(spots);
    let max_passes = out.len() + 1;

    let mut passes = 0;
    let mut changed = true;
    while changed && passes < max_passes {
        changed = false;
        passes += 1;

        for i in 0..out.len() {
            if out[i].status != QualificationStatus::Alive {
                continue;
            }
            let row = &out[i];

            if all_done && !row.standings.tied_unresolved {
                out[i].status = if i < spots {
                    QualificationStatus::Locked
                } else {
                    QualificationStatus::Out
                };
                changed = true;
                continue;
            }

            if guaranteed_below(&out, i) >= needed_below {
                out[i].status = QualificationStatus::Locked;
                changed = true;
            } else if spots > 0 && guaranteed_above(&out, i) >= spots {
                out[i].status = QualificationStatus::Out;
                changed = true;
            }
        }
    }

    log::debug!(
        "Classified {} teams in {} pass(es): {} locked, {} out",
        out.len(),
        passes,
        out.iter().filter(|r| r.status == QualificationStatus::Locked).count(),
        out.iter().filter(|r| r.status == QualificationStatus::Out).count(),
    );
    out
}

/// No team with games left can still end on `pts`, so the set of teams level on
/// `pts` (and with it their head-to-head group) is final.
fn level_settled(rows: &[QualificationRow], pts: u32) -> bool {
    !rows
        .iter()
        .any(|r| r.games_remaining > 0 && r.standings.pts <= pts && pts <= r.max_pts)
}

/// Teams that can no longer finish above `rows[i]`.
fn guaranteed_below(rows: &[QualificationRow], i: usize) -> usize {
    let row = &rows[i];
    let settled = row.games_remaining == 0
        && !row.standings.tied_unresolved
        && level_settled(rows, row.standings.pts);
    rows.iter()
        .enumerate()
        .filter(|&(j, other)| {
            j != i
                && (other.status == QualificationStatus::Out
                    || other.max_pts < row.standings.pts
                    || (settled
                        && other.games_remaining == 0
                        && other.standings.pts == row.standings.pts
                        && !other.standings.tied_unresolved
                        && j > i))
        })
        .count()
}

/// Teams that `rows[i]` can no longer finish above.
fn guaranteed_above(rows: &[QualificationRow], i: usize) -> usize {
    let row = &rows[i];
    let finished = row.games_remaining == 0 && !row.standings.tied_unresolved;
    let settled = finished && level_settled(rows, row.standings.pts);
    rows.iter()
        .enumerate()
        .filter(|&(j, other)| {
            j != i
                && (other.status == QualificationStatus::Locked
                    || other.standings.pts > row.max_pts
                    || (finished
                        && !other.standings.tied_unresolved
                        && j < i
                        && (other.standings.pts > row.standings.pts
                            || (settled && other.games_remaining == 0))))
        })
        .count()
}
