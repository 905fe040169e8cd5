//! Chess tournament web app: library with models, pairing/scoring logic, and storage.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    apply_result, apply_round_results, close_tournament, finalize_round, generate_round, rank,
    start_round, GreedyForwardPairing, PairingStrategy,
};
pub use models::{
    GameMatch, MatchSlot, Player, PlayerId, Round, Tournament, TournamentError, TournamentId,
};
pub use storage::{JsonStore, StoreError};
