//! Importance ranks to normalized weights.
//!
//! A stat with importance rank `r` gets weight `(1/r) / Σ(1/r_j)`, so smaller
//! ranks weigh more and the weights always sum to 1.

use std::collections::HashSet;

use anyhow::Result;

use crate::{config::RankingConfig, error::RankError};

#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    entries: Vec<(String, f64)>,
}

impl Weights {
    pub fn from_importance<'a, I>(ranks: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut seen = HashSet::new();
        let mut inverse = Vec::new();
        for (stat, importance) in ranks {
            if !importance.is_finite() || importance <= 0.0 {
                return Err(RankError::InvalidImportance {
                    stat: stat.to_string(),
                    importance,
                }
                .into());
            }
            if !seen.insert(stat) {
                return Err(RankError::DuplicateStat {
                    stat: stat.to_string(),
                }
                .into());
            }
            inverse.push((stat.to_string(), importance.recip()));
        }
        if inverse.is_empty() {
            return Err(RankError::NoStats.into());
        }
        let total: f64 = inverse.iter().map(|(_, value)| value).sum();
        let entries = inverse
            .into_iter()
            .map(|(stat, value)| (stat, value / total))
            .collect();
        Ok(Self { entries })
    }

    pub fn from_config(config: &RankingConfig) -> Result<Self> {
        Self::from_importance(
            config
                .stats
                .iter()
                .map(|stat| (stat.name.as_str(), stat.importance)),
        )
    }

    /// Stats and weights in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }
}
