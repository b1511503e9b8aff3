//! Standings engine: tally, tiebreakers, qualification and tie explanations.

mod group;
mod import;
mod qualification;
mod resolution;
mod standings;
mod tiebreak;

pub use group::{compute_group, GroupStandings};
pub use import::{import_games, import_games_str, ImportError};
pub use qualification::{classify, expected_games};
pub use resolution::resolve_ties;
pub use standings::{compute_standings, tally};
pub use tiebreak::{compare, compare_chain, pairwise_head_to_head, HeadToHeadTable};
