//! Scoring: apply match outcomes to the shared player ledger.

use crate::models::{GameMatch, Player, Round, TournamentError};
use chrono::Utc;

fn is_match_point(score: f64) -> bool {
    score == 0.0 || score == 0.5 || score == 1.0
}

fn validate_score_pair(a: f64, b: f64) -> Result<(), TournamentError> {
    if !is_match_point(a) || !is_match_point(b) || a + b != 1.0 {
        return Err(TournamentError::InvalidScorePair { a, b });
    }
    Ok(())
}

/// Every non-sentinel slot of `game` must resolve to a ledger entry.
fn validate_ledger(game: &GameMatch, ledger: &[Player]) -> Result<(), TournamentError> {
    for slot in [&game.slot_a, &game.slot_b] {
        if let Some(id) = &slot.player {
            if !ledger.iter().any(|p| p.id == *id) {
                return Err(TournamentError::PlayerNotFound(id.clone()));
            }
        }
    }
    Ok(())
}

fn credit(ledger: &mut [Player], id: &str, points: f64) {
    if let Some(p) = ledger.iter_mut().find(|p| p.id == id) {
        p.add_points(points);
    }
}

/// Record one match's outcome: set both slot scores and credit each
/// non-sentinel player's ledger entry. Validation runs before any mutation.
pub fn apply_result(
    game: &mut GameMatch,
    score_a: f64,
    score_b: f64,
    ledger: &mut [Player],
) -> Result<(), TournamentError> {
    validate_score_pair(score_a, score_b)?;
    validate_ledger(game, ledger)?;

    game.slot_a.score = score_a;
    game.slot_b.score = score_b;
    if let Some(id) = game.slot_a.player.clone() {
        credit(ledger, &id, score_a);
    }
    if let Some(id) = game.slot_b.player.clone() {
        credit(ledger, &id, score_b);
    }
    Ok(())
}

/// Record a whole round: outcomes are zipped against the matches in order,
/// and the round's end timestamp is stamped once everything is applied.
/// The call is all-or-nothing: every pair and ledger lookup is checked
/// before the first mutation.
pub fn apply_round_results(
    round: &mut Round,
    results: &[(f64, f64)],
    ledger: &mut [Player],
) -> Result<(), TournamentError> {
    if results.len() != round.matches.len() {
        return Err(TournamentError::ResultCountMismatch {
            expected: round.matches.len(),
            supplied: results.len(),
        });
    }
    for (game, &(a, b)) in round.matches.iter().zip(results) {
        validate_score_pair(a, b)?;
        validate_ledger(game, ledger)?;
    }

    for (game, &(a, b)) in round.matches.iter_mut().zip(results) {
        apply_result(game, a, b, ledger)?;
    }
    round.ended_at = Some(Utc::now());
    Ok(())
}
