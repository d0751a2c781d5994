//! Weighted scores and average-rank standings.

use anyhow::Result;
use itertools::Itertools;

use crate::{clean::Player, error::RankError, impute::FeatureTable, weights::Weights};

#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub name: String,
    pub team: String,
    pub score: f64,
    pub rank: f64,
}

/// Weighted sum of each row's normalized stat values, in weight order.
pub fn aggregate(table: &FeatureTable, weights: &Weights) -> Result<Vec<f64>> {
    let mut scores = vec![0.0; table.row_count()];
    for (stat, weight) in weights.iter() {
        let column = table.column(stat).ok_or_else(|| RankError::UnknownStat {
            stat: stat.to_string(),
        })?;
        for (score, value) in scores.iter_mut().zip(&column.values) {
            *score += value * weight;
        }
    }
    Ok(scores)
}

/// Descending ranks, 1 = highest. Exactly equal scores share the mean of the
/// positions they occupy.
pub fn average_ranks(scores: &[f64]) -> Vec<f64> {
    let order = (0..scores.len())
        .sorted_by(|&a, &b| scores[b].total_cmp(&scores[a]))
        .collect::<Vec<_>>();
    let mut ranks = vec![0.0; scores.len()];
    let mut position = 0usize;
    for (_, group) in &order.iter().chunk_by(|&&idx| scores[idx].to_bits()) {
        let members = group.copied().collect::<Vec<_>>();
        let first = position + 1;
        let last = position + members.len();
        let shared = (first + last) as f64 / 2.0;
        for idx in members {
            ranks[idx] = shared;
        }
        position = last;
    }
    ranks
}

/// Pairs players with scores and ranks, ordered best first. Ties keep input
/// order.
pub fn standings(players: &[Player], scores: &[f64]) -> Vec<Standing> {
    let ranks = average_ranks(scores);
    players
        .iter()
        .zip(scores)
        .zip(ranks)
        .map(|((player, &score), rank)| Standing {
            name: player.name.clone(),
            team: player.team.clone(),
            score,
            rank,
        })
        .sorted_by(|a, b| a.rank.total_cmp(&b.rank))
        .collect()
}
