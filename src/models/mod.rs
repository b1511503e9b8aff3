//! Data structures for a round-robin group: teams, games, configuration and standings rows.

mod game;
mod group;
mod standings;
mod team;

pub use game::GameResult;
pub use group::{GroupConfig, GroupError, HeadToHeadScope, Tiebreaker};
pub use standings::{QualificationRow, QualificationStatus, StandingsRow, TieResolution};
pub use team::{TeamEntry, TeamId};
