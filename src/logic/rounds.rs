//! Round lifecycle: starting rounds, finalizing them, closing tournaments.

use crate::logic::pairing::generate_round;
use crate::models::{Player, PlayerId, Round, Tournament, TournamentError};
use chrono::Utc;
use std::collections::HashMap;

/// Start the next round: pair the enrolled players against the ledger
/// scores and the tournament's pairing history, append the new round and
/// bump `current_round`. Nothing is mutated on failure.
pub fn start_round(tournament: &mut Tournament, ledger: &[Player]) -> Result<(), TournamentError> {
    if tournament.current_round >= tournament.number_of_rounds {
        return Err(TournamentError::AllRoundsPlayed);
    }
    if tournament.players.len() < 2 {
        return Err(TournamentError::InsufficientPlayers);
    }

    let scores: HashMap<PlayerId, f64> = ledger
        .iter()
        .filter(|p| tournament.players.contains(&p.id))
        .map(|p| (p.id.clone(), p.score))
        .collect();
    let past_pairs = tournament.past_pairs();

    let matches = generate_round(&tournament.players, &scores, &past_pairs)?;
    tournament.current_round += 1;
    tournament.rounds.push(Round::new(tournament.current_round, matches));
    Ok(())
}

/// Stamp the open round's end time. No-op when there is no round to close,
/// so an already-finalized round keeps its original timestamp.
pub fn finalize_round(tournament: &mut Tournament) {
    if let Some(round) = tournament.current_open_round_mut() {
        round.ended_at = Some(Utc::now());
    }
}

/// Close the tournament. Returns false (leaving it open) while any round
/// is still missing its end timestamp; this is an expected business state,
/// not an error.
pub fn close_tournament(tournament: &mut Tournament) -> bool {
    if tournament.rounds.iter().any(|r| r.is_open()) {
        return false;
    }
    tournament.is_closed = true;
    true
}
