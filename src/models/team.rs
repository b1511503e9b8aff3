//! TeamEntry: a team registered in one group.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a team (unique within a group, used in games and lookups).
pub type TeamId = Uuid;

/// A team in a playdown loop or tournament pool.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub id: TeamId,
    pub name: String,
}

impl TeamEntry {
    /// Create a team with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Change the display name. The id never changes.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
