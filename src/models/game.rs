//! GameResult: one scheduled or played game between two teams of a group.

use crate::models::team::TeamId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single game. Scores are only meaningful once `played` is set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub home_team: TeamId,
    pub away_team: TeamId,
    /// None if not yet entered.
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub played: bool,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl GameResult {
    /// A finished game with both scores.
    pub fn played(home_team: TeamId, away_team: TeamId, home_score: u32, away_score: u32) -> Self {
        Self {
            home_team,
            away_team,
            home_score: Some(home_score),
            away_score: Some(away_score),
            played: true,
            date: None,
        }
    }

    /// A game on the schedule with no result yet.
    pub fn scheduled(home_team: TeamId, away_team: TeamId) -> Self {
        Self {
            home_team,
            away_team,
            home_score: None,
            away_score: None,
            played: false,
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// `(home, away)` score if this game counts toward standings.
    ///
    /// A game counts only when it is marked played and both scores are present;
    /// a half-entered score is treated as unplayed.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if !self.played {
            return None;
        }
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => Some((h, a)),
            _ => None,
        }
    }

    /// True if `team` is on either side.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// True if the two sides are exactly `a` and `b`, in either order.
    pub fn is_between(&self, a: TeamId, b: TeamId) -> bool {
        (self.home_team == a && self.away_team == b) || (self.home_team == b && self.away_team == a)
    }

    /// Goals for and against from `team`'s point of view. None if unplayed or not involved.
    pub fn score_for(&self, team: TeamId) -> Option<(u32, u32)> {
        let (home, away) = self.final_score()?;
        if self.home_team == team {
            Some((home, away))
        } else if self.away_team == team {
            Some((away, home))
        } else {
            None
        }
    }
}
