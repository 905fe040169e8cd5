//! Tournament business logic: pairing, round lifecycle, scoring, ranking.

mod pairing;
mod ranking;
mod rounds;
mod scoring;

pub use pairing::{generate_round, GreedyForwardPairing, PairingStrategy};
pub use ranking::rank;
pub use rounds::{close_tournament, finalize_round, start_round};
pub use scoring::{apply_result, apply_round_results};
