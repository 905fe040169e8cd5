//! Swiss-style pairing: rank by score, avoid repeat pairings, bye the odd one out.

use crate::models::{normalized_pair, GameMatch, PlayerId, TournamentError};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// A pairing algorithm behind the `generate_round` contract. The greedy
/// strategy below is the default; an optimal matcher can replace it without
/// touching callers.
pub trait PairingStrategy {
    fn pair_round(
        &self,
        enrolled: &[PlayerId],
        scores: &HashMap<PlayerId, f64>,
        past_pairs: &HashSet<(PlayerId, PlayerId)>,
    ) -> Result<Vec<GameMatch>, TournamentError>;
}

/// Greedy single-pass pairing.
///
/// 1. Sort players by descending score; ties broken by an unseeded random draw.
/// 2. Walk the order left to right; pair each unmatched player with the first
///    later unmatched player they have not faced yet. No backtracking and no
///    repeat fallback, so with an exhausted history a player can stay unpaired.
/// 3. The first player still unmatched after the pass gets a bye, pre-decided
///    at a full point.
pub struct GreedyForwardPairing;

impl PairingStrategy for GreedyForwardPairing {
    fn pair_round(
        &self,
        enrolled: &[PlayerId],
        scores: &HashMap<PlayerId, f64>,
        past_pairs: &HashSet<(PlayerId, PlayerId)>,
    ) -> Result<Vec<GameMatch>, TournamentError> {
        if enrolled.len() < 2 {
            return Err(TournamentError::InsufficientPlayers);
        }

        let mut rng = rand::thread_rng();
        let mut keyed: Vec<(PlayerId, f64, u32)> = enrolled
            .iter()
            .map(|id| {
                let score = scores.get(id).copied().unwrap_or(0.0);
                (id.clone(), score, rng.gen::<u32>())
            })
            .collect();
        keyed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.2.cmp(&b.2)));
        let order: Vec<PlayerId> = keyed.into_iter().map(|(id, _, _)| id).collect();

        let mut used = vec![false; order.len()];
        let mut matches = Vec::with_capacity(order.len() / 2 + 1);
        for i in 0..order.len() {
            if used[i] {
                continue;
            }
            for j in i + 1..order.len() {
                if used[j] || past_pairs.contains(&normalized_pair(&order[i], &order[j])) {
                    continue;
                }
                matches.push(GameMatch::paired(order[i].clone(), order[j].clone()));
                used[i] = true;
                used[j] = true;
                break;
            }
        }

        if let Some(i) = (0..order.len()).find(|&i| !used[i]) {
            matches.push(GameMatch::bye(order[i].clone()));
        }

        Ok(matches)
    }
}

/// Generate the next round's matches with the default strategy.
pub fn generate_round(
    enrolled: &[PlayerId],
    scores: &HashMap<PlayerId, f64>,
    past_pairs: &HashSet<(PlayerId, PlayerId)>,
) -> Result<Vec<GameMatch>, TournamentError> {
    GreedyForwardPairing.pair_round(enrolled, scores, past_pairs)
}
