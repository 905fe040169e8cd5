//! Tournament record and TournamentError.

use crate::models::player::PlayerId;
use crate::models::round::Round;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 players enrolled; pairing is impossible.
    InsufficientPlayers,
    /// The tournament already ran its full round budget.
    AllRoundsPlayed,
    /// A score pair must be two values from {0, 0.5, 1} summing to 1.
    InvalidScorePair { a: f64, b: f64 },
    /// The supplied results list does not match the round's match count.
    ResultCountMismatch { expected: usize, supplied: usize },
    /// A match references a player missing from the ledger.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientPlayers => {
                write!(f, "Need at least 2 enrolled players to pair a round")
            }
            TournamentError::AllRoundsPlayed => {
                write!(f, "All rounds of this tournament have already been played")
            }
            TournamentError::InvalidScorePair { a, b } => {
                write!(f, "Invalid score pair ({a}, {b}): each score must be 0, 0.5 or 1 and the pair must sum to 1")
            }
            TournamentError::ResultCountMismatch { expected, supplied } => {
                write!(f, "Expected {expected} results for this round, got {supplied}")
            }
            TournamentError::PlayerNotFound(id) => write!(f, "Player {id} not found"),
        }
    }
}

/// Opaque stable identifier for a tournament.
pub type TournamentId = String;

/// A tournament: enrolled player ids, the rounds played so far, and the
/// round budget. Rounds are append-only; `current_round` always equals
/// `rounds.len()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub location: String,
    /// `YYYY-MM-DD`, display only.
    pub start_date: String,
    /// `YYYY-MM-DD`, display only.
    pub end_date: String,
    pub description: String,
    pub number_of_rounds: u32,
    pub current_round: u32,
    pub rounds: Vec<Round>,
    /// Enrolled player ids, insertion order, no duplicates.
    pub players: Vec<PlayerId>,
    /// One-way transition false -> true via `close_tournament`.
    pub is_closed: bool,
}

impl Tournament {
    /// Create a tournament with no rounds and no enrolled players.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        description: impl Into<String>,
        number_of_rounds: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            location: location.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            description: description.into(),
            number_of_rounds,
            current_round: 0,
            rounds: Vec::new(),
            players: Vec::new(),
            is_closed: false,
        }
    }

    /// Enroll one player. Returns false if the id was already enrolled.
    pub fn register_player(&mut self, id: PlayerId) -> bool {
        if self.players.contains(&id) {
            return false;
        }
        self.players.push(id);
        true
    }

    /// Enroll several players; returns how many were newly added.
    pub fn register_players(&mut self, ids: impl IntoIterator<Item = PlayerId>) -> usize {
        ids.into_iter().filter(|id| self.register_player(id.clone())).count()
    }

    /// The single open round, if any. Only the last round can be open.
    pub fn current_open_round(&self) -> Option<&Round> {
        self.rounds.last().filter(|r| r.is_open())
    }

    pub fn current_open_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut().filter(|r| r.is_open())
    }

    pub fn has_open_round(&self) -> bool {
        self.current_open_round().is_some()
    }

    /// All pairs already played in this tournament. Byes contribute nothing.
    pub fn past_pairs(&self) -> HashSet<(PlayerId, PlayerId)> {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .filter_map(|m| m.pair_key())
            .collect()
    }
}
