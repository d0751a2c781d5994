//! Numeric coercion of the loaded table.
//!
//! Every non-identifier column becomes a [`CleanColumn`] of `Option<f64>`
//! cells. The missing-value token, blank cells and anything that does not
//! parse as a finite number are stored as `None`. Cells are trimmed of
//! surrounding whitespace before any comparison, as header names are.

use anyhow::Result;
use log::debug;

use crate::{config::RankingConfig, dataset::RawTable, error::RankError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl CleanColumn {
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanTable {
    pub players: Vec<Player>,
    pub columns: Vec<CleanColumn>,
}

pub fn parse_cell(raw: &str, missing_token: &str) -> Option<f64> {
    let cell = raw.trim();
    if cell == missing_token {
        return None;
    }
    cell.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Checks that the identifier columns and every configured stat are present.
pub fn validate_headers(raw: &RawTable, config: &RankingConfig) -> Result<()> {
    let required = config
        .identifier_columns()
        .into_iter()
        .chain(config.stats.iter().map(|stat| stat.name.as_str()));
    for column in required {
        if raw.column_index(column).is_none() {
            return Err(RankError::MissingColumn {
                column: column.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

pub fn clean(raw: &RawTable, config: &RankingConfig) -> Result<CleanTable> {
    validate_headers(raw, config)?;

    let name_idx = raw.column_index(&config.name_column);
    let team_idx = raw.column_index(&config.team_column);
    let text_at = |row: &[String], idx: Option<usize>| {
        idx.and_then(|i| row.get(i))
            .map(|cell| cell.trim().to_string())
            .unwrap_or_default()
    };
    let players = raw
        .rows
        .iter()
        .map(|row| Player {
            name: text_at(row.as_slice(), name_idx),
            team: text_at(row.as_slice(), team_idx),
        })
        .collect();

    let columns = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !config.is_identifier(header))
        .map(|(idx, header)| {
            let values = raw
                .column(idx)
                .map(|cell| parse_cell(cell, &config.missing_token))
                .collect::<Vec<_>>();
            let column = CleanColumn {
                name: header.clone(),
                values,
            };
            debug!(
                "Column '{}': {} missing cell(s) after coercion",
                column.name,
                column.missing_count()
            );
            column
        })
        .collect();

    Ok(CleanTable { players, columns })
}
