//! Error kinds raised by the ranking pipeline.
//!
//! Pipeline functions return [`anyhow::Result`]; the variants below are the
//! failures callers may want to tell apart, recoverable via
//! `err.downcast_ref::<RankError>()`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    /// The input table is absent, unreadable, or not a well-formed delimited file.
    #[error("Malformed input {path:?}: {reason}")]
    Format { path: PathBuf, reason: String },

    /// A column required for ranking is not present in the input header.
    #[error("Input header is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Input header contains column '{column}' more than once")]
    DuplicateColumn { column: String },

    /// Importance ranks must be positive and finite so their reciprocals exist.
    #[error("Importance rank for '{stat}' must be a positive finite number (got {importance})")]
    InvalidImportance { stat: String, importance: f64 },

    #[error("Stat '{stat}' is listed more than once in the ranking configuration")]
    DuplicateStat { stat: String },

    #[error("Ranking configuration does not list any stats")]
    NoStats,

    /// A weighted stat has no matching feature column at aggregation time.
    #[error("No feature column named '{stat}' is available for scoring")]
    UnknownStat { stat: String },
}
