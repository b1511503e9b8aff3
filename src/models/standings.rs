//! Output rows: standings, qualification status and tie explanations.

use crate::models::group::Tiebreaker;
use crate::models::team::{TeamEntry, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One team's line in the standings table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub name: String,
    pub gp: u32,
    pub w: u32,
    pub l: u32,
    pub t: u32,
    /// Goal totals are wider than a single score so any number of games adds up.
    pub gf: u64,
    pub ga: u64,
    /// 2 per win, 1 per tie.
    pub pts: u32,
    pub diff: i64,
    /// Within the first `qualifying_spots` rows of the final order.
    pub qualifies: bool,
    /// Level with an adjacent team on every configured tiebreaker.
    pub tied_unresolved: bool,
}

impl StandingsRow {
    /// Empty row for a team that has not played yet.
    pub fn new(team: &TeamEntry) -> Self {
        Self {
            team_id: team.id,
            name: team.name.clone(),
            ..Self::default()
        }
    }

    /// Add one game from this team's point of view.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.gp += 1;
        self.gf = self.gf.saturating_add(u64::from(goals_for));
        self.ga = self.ga.saturating_add(u64::from(goals_against));
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.w += 1,
            std::cmp::Ordering::Less => self.l += 1,
            std::cmp::Ordering::Equal => self.t += 1,
        }
    }

    /// Recompute `pts` and `diff` from the counters.
    pub fn finish(&mut self) {
        self.pts = self.w.saturating_mul(2).saturating_add(self.t);
        self.diff = clamp_i64(self.gf).saturating_sub(clamp_i64(self.ga));
    }
}

fn clamp_i64(goals: u64) -> i64 {
    i64::try_from(goals).unwrap_or(i64::MAX)
}

/// Whether a team's finishing position relative to the qualifying line is decided.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationStatus {
    /// Still depends on remaining results.
    #[default]
    Alive,
    /// Guaranteed a qualifying spot.
    Locked,
    /// Guaranteed to miss the qualifying spots.
    Out,
}

/// Standings row plus what the team can still reach.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct QualificationRow {
    #[serde(flatten)]
    pub standings: StandingsRow,
    pub games_remaining: u32,
    /// Points if every remaining game is won.
    pub max_pts: u32,
    pub status: QualificationStatus,
}

/// Why one team sits directly above an equal-points neighbour.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TieResolution {
    /// (upper, lower) in the standings order.
    pub teams_involved: (TeamId, TeamId),
    pub resolved_by: Tiebreaker,
    pub detail: String,
    /// Tiebreaker label -> the value both teams shared before the deciding one.
    pub tied_values: BTreeMap<String, i64>,
}
