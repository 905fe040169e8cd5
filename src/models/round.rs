//! Round and match records: one pairing-and-scoring cycle of a tournament.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One side of a match: a player (or the bye sentinel) and the points
/// awarded to that side. Scores are 0.0 until the round is decided, which
/// is tracked by the round's end timestamp, not per match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSlot {
    /// `None` means "no opponent" (a bye). Never `None` in both slots.
    pub player: Option<PlayerId>,
    pub score: f64,
}

/// A single match between two slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub slot_a: MatchSlot,
    pub slot_b: MatchSlot,
}

impl GameMatch {
    /// An undecided match between two players.
    pub fn paired(a: PlayerId, b: PlayerId) -> Self {
        Self {
            slot_a: MatchSlot {
                player: Some(a),
                score: 0.0,
            },
            slot_b: MatchSlot {
                player: Some(b),
                score: 0.0,
            },
        }
    }

    /// A bye: pre-decided, the lone player takes the full point.
    pub fn bye(player: PlayerId) -> Self {
        Self {
            slot_a: MatchSlot {
                player: Some(player),
                score: 1.0,
            },
            slot_b: MatchSlot {
                player: None,
                score: 0.0,
            },
        }
    }

    pub fn is_bye(&self) -> bool {
        self.slot_a.player.is_none() || self.slot_b.player.is_none()
    }

    /// The normalized (ordered) pair of players, or `None` for a bye.
    /// Used to build a tournament's pairing history.
    pub fn pair_key(&self) -> Option<(PlayerId, PlayerId)> {
        match (&self.slot_a.player, &self.slot_b.player) {
            (Some(a), Some(b)) => Some(normalized_pair(a, b)),
            _ => None,
        }
    }
}

/// Order-insensitive key for a pair of players.
pub fn normalized_pair(a: &PlayerId, b: &PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// One round of a tournament. Open while `ended_at` is `None`; the end
/// timestamp is set exactly once, when results are finalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub matches: Vec<GameMatch>,
}

impl Round {
    /// Open a round numbered `number` (1-based) with its generated matches.
    pub fn new(number: u32, matches: Vec<GameMatch>) -> Self {
        Self {
            name: format!("Round {number}"),
            started_at: Utc::now(),
            ended_at: None,
            matches,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}
