//! Loading the player table.
//!
//! [`RawTable`] holds the header and every record as text, in file order.
//! Any failure to read or parse the file is reported as
//! [`RankError::Format`].

use std::{collections::HashSet, io::Read, path::Path};

use anyhow::Result;
use encoding_rs::Encoding;
use log::debug;

use crate::{error::RankError, io_utils};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn load(path: &Path, delimiter: u8, encoding: &'static Encoding) -> Result<Self> {
        let reader = io_utils::open_input(path).map_err(|err| RankError::Format {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        Self::from_reader(reader, path, delimiter, encoding)
    }

    /// Reads a table from any byte stream; `origin` is used in error messages.
    pub fn from_reader<R: Read>(
        reader: R,
        origin: &Path,
        delimiter: u8,
        encoding: &'static Encoding,
    ) -> Result<Self> {
        let format_error = |reason: String| RankError::Format {
            path: origin.to_path_buf(),
            reason,
        };

        let mut reader = io_utils::open_csv_reader(reader, delimiter);
        let header_record = reader
            .byte_headers()
            .map_err(|err| format_error(err.to_string()))?
            .clone();
        let headers = io_utils::decode_record(&header_record, encoding)
            .map_err(|err| format_error(format!("header row: {err}")))?
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(format_error("missing header row".to_string()).into());
        }
        let mut seen = HashSet::with_capacity(headers.len());
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(RankError::DuplicateColumn {
                    column: header.clone(),
                }
                .into());
            }
        }

        let mut rows = Vec::new();
        for (row_idx, record) in reader.byte_records().enumerate() {
            let record =
                record.map_err(|err| format_error(format!("row {}: {err}", row_idx + 2)))?;
            let decoded = io_utils::decode_record(&record, encoding)
                .map_err(|err| format_error(format!("row {}: {err}", row_idx + 2)))?;
            rows.push(decoded);
        }
        debug!(
            "Loaded {} row(s) with {} column(s) from {:?}",
            rows.len(),
            headers.len(),
            origin
        );
        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterates the cells of one column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }
}
