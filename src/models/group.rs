//! GroupConfig, Tiebreaker and the admin-side editing of a group.

use crate::models::team::{TeamEntry, TeamId};
use serde::{Deserialize, Serialize};

/// Errors that can occur while editing or validating a group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GroupError {
    /// Team name is empty after trimming.
    EmptyTeamName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName(String),
    /// Two teams share an id.
    DuplicateTeamId(TeamId),
    /// Team not found in this group.
    TeamNotFound(TeamId),
    /// A tiebreaker appears more than once in the order.
    DuplicateTiebreaker(Tiebreaker),
    /// Fewer expected teams than teams already entered.
    TotalTeamsTooSmall { total_teams: usize, entered: usize },
}

impl std::fmt::Display for GroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupError::EmptyTeamName => write!(f, "Team name must not be empty"),
            GroupError::DuplicateTeamName(name) => {
                write!(f, "A team named '{}' already exists in this group", name)
            }
            GroupError::DuplicateTeamId(id) => write!(f, "Team id {} appears more than once", id),
            GroupError::TeamNotFound(_) => write!(f, "Team not found"),
            GroupError::DuplicateTiebreaker(tb) => {
                write!(f, "Tiebreaker '{}' is listed more than once", tb.label())
            }
            GroupError::TotalTeamsTooSmall { total_teams, entered } => write!(
                f,
                "Group expects {} teams but {} are already entered",
                total_teams, entered
            ),
        }
    }
}

impl std::error::Error for GroupError {}

/// One rule applied to two teams level on points.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tiebreaker {
    Wins,
    HeadToHead,
    GoalDifferential,
    /// Fewer is better.
    GoalsAllowed,
    GoalsFor,
}

impl Tiebreaker {
    pub const ALL: [Tiebreaker; 5] = [
        Tiebreaker::Wins,
        Tiebreaker::HeadToHead,
        Tiebreaker::GoalDifferential,
        Tiebreaker::GoalsAllowed,
        Tiebreaker::GoalsFor,
    ];

    /// Order used by playdown loops. Not configurable there.
    pub const PLAYDOWN_ORDER: [Tiebreaker; 4] = [
        Tiebreaker::Wins,
        Tiebreaker::HeadToHead,
        Tiebreaker::GoalDifferential,
        Tiebreaker::GoalsAllowed,
    ];

    /// Display label (used as the key of tied values in resolution reports).
    pub fn label(self) -> &'static str {
        match self {
            Tiebreaker::Wins => "Wins",
            Tiebreaker::HeadToHead => "Head-to-Head",
            Tiebreaker::GoalDifferential => "Goal Differential",
            Tiebreaker::GoalsAllowed => "Goals Allowed",
            Tiebreaker::GoalsFor => "Goals For",
        }
    }
}

/// Which teams form the "tied group" whose mutual games decide head-to-head.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadToHeadScope {
    /// Every team on the same points (tournament pools).
    #[default]
    Points,
    /// Same points and same wins (playdown loops, where wins are compared first).
    ///
    /// If head-to-head comes before wins in the order (or wins is left out), the
    /// head-to-head step itself puts the team with more wins ahead, since teams
    /// with different wins are never in the same group. Tie explanations still
    /// report that step as head-to-head with the pair's direct-game points.
    PointsAndWins,
}

fn default_tiebreaker_order() -> Vec<Tiebreaker> {
    Tiebreaker::ALL.to_vec()
}

fn default_games_per_matchup() -> u32 {
    1
}

/// A round-robin group: a playdown loop or one tournament pool.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub teams: Vec<TeamEntry>,
    /// Expected group size; may exceed `teams.len()` while opponents are still being entered.
    pub total_teams: usize,
    /// Top positions that qualify (K).
    pub qualifying_spots: usize,
    /// Games each pair of teams plays (M).
    #[serde(default = "default_games_per_matchup")]
    pub games_per_matchup: u32,
    #[serde(default = "default_tiebreaker_order")]
    pub tiebreaker_order: Vec<Tiebreaker>,
    #[serde(default)]
    pub head_to_head_scope: HeadToHeadScope,
}

impl GroupConfig {
    /// Playdown loop: fixed tiebreaker order, head-to-head among teams level on points and wins.
    pub fn playdown(
        teams: Vec<TeamEntry>,
        total_teams: usize,
        qualifying_spots: usize,
        games_per_matchup: u32,
    ) -> Self {
        Self {
            teams,
            total_teams,
            qualifying_spots,
            games_per_matchup,
            tiebreaker_order: Tiebreaker::PLAYDOWN_ORDER.to_vec(),
            head_to_head_scope: HeadToHeadScope::PointsAndWins,
        }
    }

    /// Tournament pool: every team entered up front, default configurable order.
    pub fn pool(teams: Vec<TeamEntry>, qualifying_spots: usize, games_per_matchup: u32) -> Self {
        Self {
            total_teams: teams.len(),
            teams,
            qualifying_spots,
            games_per_matchup,
            tiebreaker_order: default_tiebreaker_order(),
            head_to_head_scope: HeadToHeadScope::Points,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&TeamEntry> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TeamId) -> bool {
        self.team(id).is_some()
    }

    /// Case-insensitive lookup by name.
    pub fn team_by_name(&self, name: &str) -> Option<&TeamEntry> {
        let name = name.trim();
        self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    fn check_name(&self, name: &str, except: Option<TeamId>) -> Result<(), GroupError> {
        if name.is_empty() {
            return Err(GroupError::EmptyTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| Some(t.id) != except && t.name.eq_ignore_ascii_case(name));
        if is_duplicate {
            return Err(GroupError::DuplicateTeamName(name.to_string()));
        }
        Ok(())
    }

    /// Add a team. Names must be unique (case-insensitive). Grows `total_teams` if needed.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, GroupError> {
        let name = name.into();
        let name = name.trim();
        self.check_name(name, None)?;
        let team = TeamEntry::new(name);
        let id = team.id;
        self.teams.push(team);
        self.total_teams = self.total_teams.max(self.teams.len());
        Ok(id)
    }

    /// Remove a team by id. `total_teams` is left alone.
    pub fn remove_team(&mut self, id: TeamId) -> Result<TeamEntry, GroupError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(GroupError::TeamNotFound(id))?;
        Ok(self.teams.remove(idx))
    }

    pub fn rename_team(&mut self, id: TeamId, name: impl Into<String>) -> Result<(), GroupError> {
        let name = name.into();
        let name = name.trim();
        self.check_name(name, Some(id))?;
        self.teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(GroupError::TeamNotFound(id))?
            .rename(name);
        Ok(())
    }

    /// Replace the tiebreaker order. Each tiebreaker may appear at most once.
    pub fn set_tiebreaker_order(&mut self, order: Vec<Tiebreaker>) -> Result<(), GroupError> {
        check_tiebreaker_order(&order)?;
        self.tiebreaker_order = order;
        Ok(())
    }

    /// Check a config received from outside (admin form, JSON body).
    ///
    /// The standings functions accept any config; this is for callers that want to
    /// reject bad input before saving it.
    pub fn validate(&self) -> Result<(), GroupError> {
        check_tiebreaker_order(&self.tiebreaker_order)?;
        let mut seen_ids = std::collections::HashSet::new();
        let mut seen_names = std::collections::HashSet::new();
        for team in &self.teams {
            if !seen_ids.insert(team.id) {
                return Err(GroupError::DuplicateTeamId(team.id));
            }
            let name = team.name.trim();
            if name.is_empty() {
                return Err(GroupError::EmptyTeamName);
            }
            if !seen_names.insert(name.to_ascii_lowercase()) {
                return Err(GroupError::DuplicateTeamName(name.to_string()));
            }
        }
        if self.total_teams < self.teams.len() {
            return Err(GroupError::TotalTeamsTooSmall {
                total_teams: self.total_teams,
                entered: self.teams.len(),
            });
        }
        Ok(())
    }
}

fn check_tiebreaker_order(order: &[Tiebreaker]) -> Result<(), GroupError> {
    for (i, tb) in order.iter().enumerate() {
        if order[..i].contains(tb) {
            return Err(GroupError::DuplicateTiebreaker(*tb));
        }
    }
    Ok(())
}
