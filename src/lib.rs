//! Round-robin standings for youth-league groups: library with models and the standings engine.
//!
//! The engine is a set of pure functions from a [`GroupConfig`] and its [`GameResult`]s
//! to ranked standings, qualification status and tie explanations.

pub mod logic;
pub mod models;

pub use logic::{
    classify, compute_group, compute_standings, import_games, import_games_str, resolve_ties,
    GroupStandings, ImportError,
};
pub use models::{
    GameResult, GroupConfig, GroupError, HeadToHeadScope, QualificationRow, QualificationStatus,
    StandingsRow, TeamEntry, TeamId, TieResolution, Tiebreaker,
};
