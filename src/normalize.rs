//! Min-max scaling and polarity inversion of feature columns.

use anyhow::Result;
use log::{debug, warn};

use crate::{
    error::RankError,
    impute::{FeatureColumn, FeatureTable},
};

/// Value assigned to every cell of a constant column.
pub const NEUTRAL_VALUE: f64 = 0.5;

pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

/// Rescales a column to [0,1]: the minimum maps to 0 and the maximum to 1.
pub fn normalize_column(column: &mut FeatureColumn) {
    let Some((min, max)) = min_max(&column.values) else {
        return;
    };
    if max <= min {
        warn!(
            "Column '{}' is constant ({min}); using {NEUTRAL_VALUE} for every row",
            column.name
        );
        column.values.fill(NEUTRAL_VALUE);
        return;
    }
    debug!("Column '{}': min {min}, max {max}", column.name);
    for value in &mut column.values {
        *value = scale(*value, min, max);
    }
}

fn scale(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    let scaled = if range.is_finite() {
        (value - min) / range
    } else {
        // max - min overflows near f64::MAX; halving every term keeps it finite
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    };
    scaled.clamp(0.0, 1.0)
}

pub fn normalize(table: &mut FeatureTable) {
    for column in &mut table.columns {
        normalize_column(column);
    }
}

/// Flips the named columns so that a higher value is better everywhere.
pub fn invert<'a, I>(table: &mut FeatureTable, stats: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for stat in stats {
        let column = table
            .column_mut(stat)
            .ok_or_else(|| RankError::UnknownStat {
                stat: stat.to_string(),
            })?;
        for value in &mut column.values {
            *value = 1.0 - *value;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::Player;

    fn column(name: &str, values: Vec<f64>) -> FeatureColumn {
        FeatureColumn {
            name: name.to_string(),
            values,
        }
    }

    #[test]
    fn endpoints_map_to_zero_and_one() {
        let mut col = column("Rush_Yds", vec![200.0, 100.0, 150.0, 125.0]);
        normalize_column(&mut col);
        assert_eq!(col.values, vec![1.0, 0.0, 0.5, 0.25]);
    }

    #[test]
    fn constant_column_becomes_neutral() {
        let mut col = column("Games_Played", vec![17.0, 17.0, 17.0]);
        normalize_column(&mut col);
        assert_eq!(col.values, vec![NEUTRAL_VALUE; 3]);
    }

    #[test]
    fn extreme_magnitudes_stay_within_unit_range() {
        let mut col = column("Rush_Yds", vec![-f64::MAX, f64::MAX, 0.0]);
        normalize_column(&mut col);
        assert_eq!(col.values, vec![0.0, 1.0, 0.5]);

        let mut col = column("Rush_Yds", vec![-1e308, 1e308, 0.0]);
        normalize_column(&mut col);
        assert!(col.values.iter().all(|v| v.is_finite()));
        assert_eq!(col.values, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn empty_column_is_left_alone() {
        let mut col = column("Games_Played", Vec::new());
        normalize_column(&mut col);
        assert!(col.values.is_empty());
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn inversion_flips_only_named_columns() {
        let mut table = FeatureTable {
            players: vec![
                Player {
                    name: "A".into(),
                    team: "X".into(),
                },
                Player {
                    name: "B".into(),
                    team: "Y".into(),
                },
            ],
            columns: vec![
                column("Depth_Chart", vec![1.0, 5.0]),
                column("Rush_Yds", vec![10.0, 30.0]),
            ],
        };
        normalize(&mut table);
        invert(&mut table, ["Depth_Chart"]).unwrap();
        assert_eq!(table.column("Depth_Chart").unwrap().values, vec![1.0, 0.0]);
        assert_eq!(table.column("Rush_Yds").unwrap().values, vec![0.0, 1.0]);
    }

    #[test]
    fn inverting_unknown_column_fails() {
        let mut table = FeatureTable {
            players: Vec::new(),
            columns: Vec::new(),
        };
        let err = invert(&mut table, ["Depth_Chart"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RankError>(),
            Some(RankError::UnknownStat { stat }) if stat == "Depth_Chart"
        ));
    }
}
