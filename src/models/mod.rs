//! Data structures for the chess tournament: players, rounds, matches, tournaments.

mod player;
mod round;
mod tournament;

pub use player::{Player, PlayerId};
pub use round::{normalized_pair, GameMatch, MatchSlot, Round};
pub use tournament::{Tournament, TournamentError, TournamentId};
