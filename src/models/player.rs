//! Player data structure and the score ledger it carries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque stable identifier for a player. The core only compares these for
/// equality; it never parses them.
pub type PlayerId = String;

/// A registered player. The `score` field is the ledger: it accumulates
/// across every tournament the player joins, not per tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub last_name: String,
    pub first_name: String,
    /// Birth date as `YYYY-MM-DD`; used only for display and sorting.
    pub birth_date: String,
    /// Accumulated score. Starts at 0, grows by 0, 0.5 or 1 per decided match.
    pub score: f64,
}

impl Player {
    /// Create a new player with a fresh id and a zero score.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            birth_date: birth_date.into(),
            score: 0.0,
        }
    }

    /// Credit match points (0, 0.5 or 1) to this player's ledger entry.
    pub fn add_points(&mut self, points: f64) {
        self.score += points;
    }
}
