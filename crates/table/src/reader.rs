// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File reading and record splitting.

use crate::table::{Row, Table};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cell delimiter for every table this crate reads.
pub const DELIMITER: u8 = b';';

/// A file could not be opened, was not valid UTF-8, or could not be parsed.
#[derive(Debug, Error)]
#[error("failed to read file {}: {source}", .path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: csv::Error,
}

/// Read a whole file into a [`Table`].
pub fn read_table(path: &Path) -> Result<Table, ReadError> {
    let to_read_error = |source| ReadError {
        path: path.to_path_buf(),
        source,
    };
    let reader = reader_builder().from_path(path).map_err(to_read_error)?;
    collect_table(reader).map_err(to_read_error)
}

/// Parse delimited text into a [`Table`].
///
/// Fields may be double-quoted; a quoted field can hold the delimiter, line
/// breaks and `""` escapes. Every cell is trimmed. Lines with no content at
/// all are skipped.
pub fn parse_table(content: &str) -> Result<Table, csv::Error> {
    collect_table(reader_builder().from_reader(content.as_bytes()))
}

// No header handling and no fixed width: row shape is the caller's concern.
fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(DELIMITER).has_headers(false).flexible(true);
    builder
}

fn collect_table<R: Read>(mut reader: csv::Reader<R>) -> Result<Table, csv::Error> {
    let rows = reader
        .records()
        .map(|record| record.map(|record| record.iter().map(str::trim).collect::<Row>()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Table::new(rows))
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
