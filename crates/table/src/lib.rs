// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Semicolon-delimited table reading.
//!
//! Files are read whole as UTF-8 and split into rows of trimmed cells. No
//! row-shape validation happens here; callers decide what a well-formed
//! table looks like.

mod reader;
mod table;

pub use reader::{parse_table, read_table, ReadError, DELIMITER};
pub use table::{Row, Table};
