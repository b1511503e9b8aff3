//! One call that runs the whole engine for a group.

use crate::logic::qualification::classify;
use crate::logic::resolution::resolve_ties;
use crate::logic::standings::compute_standings;
use crate::models::{GameResult, GroupConfig, QualificationRow, TieResolution};
use serde::{Deserialize, Serialize};

/// Everything the UI shows for one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandings {
    /// Best to worst, with qualification status.
    pub standings: Vec<QualificationRow>,
    pub resolutions: Vec<TieResolution>,
}

/// Standings, qualification status and tie explanations for `config`.
pub fn compute_group(config: &GroupConfig, games: &[GameResult]) -> GroupStandings {
    let rows = compute_standings(config, games);
    let resolutions = resolve_ties(&rows, games, &config.tiebreaker_order);
    let standings = classify(&rows, config);
    GroupStandings {
        standings,
        resolutions,
    }
}
