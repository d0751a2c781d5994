//! Mean imputation.
//!
//! Consumes a [`CleanTable`] and produces a [`FeatureTable`] whose columns
//! hold no missing values. Each column is filled from its own mean only.

use log::{debug, warn};

use crate::clean::{CleanColumn, CleanTable, Player};

/// Fill value for a column with no present values at all.
pub const EMPTY_COLUMN_FILL: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureColumn {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    pub players: Vec<Player>,
    pub columns: Vec<FeatureColumn>,
}

impl FeatureTable {
    pub fn column(&self, name: &str) -> Option<&FeatureColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut FeatureColumn> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.players.len()
    }
}

/// Running mean of the present values. Each step works on halves so that
/// values near `f64::MAX` never overflow.
pub fn column_mean(values: &[Option<f64>]) -> Option<f64> {
    let (mean, count) = values
        .iter()
        .flatten()
        .fold((0.0_f64, 0usize), |(mean, count), value| {
            let count = count + 1;
            let step = (value / 2.0 - mean / 2.0) / count as f64;
            (mean + step * 2.0, count)
        });
    (count > 0).then_some(mean)
}

pub fn impute_column(column: CleanColumn) -> FeatureColumn {
    let missing = column.missing_count();
    let fill = match column_mean(&column.values) {
        Some(mean) => mean,
        None => {
            if !column.values.is_empty() {
                warn!(
                    "Column '{}' has no numeric values; filling with {EMPTY_COLUMN_FILL}",
                    column.name
                );
            }
            EMPTY_COLUMN_FILL
        }
    };
    if missing > 0 {
        debug!(
            "Column '{}': imputed {missing} missing cell(s) with {fill}",
            column.name
        );
    }
    FeatureColumn {
        name: column.name,
        values: column
            .values
            .into_iter()
            .map(|value| value.unwrap_or(fill))
            .collect(),
    }
}

pub fn impute(table: CleanTable) -> FeatureTable {
    FeatureTable {
        players: table.players,
        columns: table.columns.into_iter().map(impute_column).collect(),
    }
}
