//! Standings: enrolled players ordered by descending ledger score.

use crate::models::{Player, PlayerId};

/// Rank the enrolled players by descending score. The sort is stable, so
/// equal scores keep the enrollment insertion order. Players missing from
/// the ledger rank with a zero score.
pub fn rank(enrolled: &[PlayerId], ledger: &[Player]) -> Vec<(PlayerId, f64)> {
    let mut standings: Vec<(PlayerId, f64)> = enrolled
        .iter()
        .map(|id| {
            let score = ledger
                .iter()
                .find(|p| p.id == *id)
                .map(|p| p.score)
                .unwrap_or(0.0);
            (id.clone(), score)
        })
        .collect();
    standings.sort_by(|a, b| b.1.total_cmp(&a.1));
    standings
}
