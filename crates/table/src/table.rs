// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row and table types.

/// One parsed line: an ordered sequence of trimmed cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Create a row from already-trimmed cells
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// All cells in column order
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Ordered rows of a delimited file. Row 0 is the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Rows after the header. Empty when the table has at most one row.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, header included
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
