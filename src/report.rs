//! Parser for `perf report` text output
//!
//! Extracts per-function cumulative CPU percentages from the pipe-delimited
//! column format emitted by `perf report`:
//!
//! ```text
//!   45.20%|3.10%|libfoo.so|libfoo|[.] some_function
//! ```
//!
//! Header and decoration lines carry no percentage column and are skipped.

use regex::Regex;
use std::collections::HashMap;
use std::io::BufRead;
use thiserror::Error;

/// Per-function observation lists, accumulated across report files.
///
/// A function that appears on several rows of one report contributes one
/// observation per row; nothing is deduplicated here.
pub type StackObservations = HashMap<String, Vec<f64>>;

/// Errors for report parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: expected 5 pipe-delimited fields, got {fields}: {content:?}")]
    FieldCount {
        line: usize,
        fields: usize,
        content: String,
    },

    #[error("line {line}: cumulative column {value:?} is not a percentage")]
    BadPercentage { line: usize, value: String },

    #[error("read failed at line {line}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Width of the glyph prefix `perf report` puts before the symbol name
/// (e.g. `[.] ` for user-space symbols)
const SYMBOL_PREFIX_WIDTH: usize = 4;

/// Parser for `perf report` streams
#[derive(Debug)]
pub struct ReportParser {
    /// Matches the cumulative-percentage column that opens every data row
    data_row: Regex,
}

impl ReportParser {
    pub fn new() -> Self {
        Self {
            data_row: Regex::new(r"^\s+[0-9.]+%\|").expect("data row pattern is valid"),
        }
    }

    /// Parse one decompressed report stream, appending each data row's
    /// cumulative percentage under its function name in `stacks`.
    ///
    /// Returns the number of rows recorded. A row that looks like data but
    /// fails to split or parse aborts the whole stream.
    pub fn parse<R: BufRead>(
        &self,
        reader: R,
        stacks: &mut StackObservations,
    ) -> Result<usize, ParseError> {
        let mut recorded = 0;

        for (idx, line) in reader.lines().enumerate() {
            let lineno = idx + 1;
            let line = line.map_err(|source| ParseError::Io {
                line: lineno,
                source,
            })?;
            let line = line.trim_end();

            if !self.data_row.is_match(line) {
                continue;
            }

            let fields: Vec<&str> = line.split('|').collect();
            // cumulative | self | binary | library | function
            if fields.len() != 5 {
                return Err(ParseError::FieldCount {
                    line: lineno,
                    fields: fields.len(),
                    content: line.to_string(),
                });
            }

            let cumulative =
                parse_percentage(fields[0]).ok_or_else(|| ParseError::BadPercentage {
                    line: lineno,
                    value: fields[0].trim().to_string(),
                })?;
            let function = strip_symbol_prefix(fields[4]);

            stacks.entry(function.to_string()).or_default().push(cumulative);
            recorded += 1;
        }

        Ok(recorded)
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop the fixed-width glyph prefix from the raw symbol field. Fields
/// shorter than the prefix collapse to the empty string rather than erroring.
fn strip_symbol_prefix(field: &str) -> &str {
    match field.char_indices().nth(SYMBOL_PREFIX_WIDTH) {
        Some((idx, _)) => &field[idx..],
        None => "",
    }
}

/// Parse a `45.20%`-style column into its numeric value
fn parse_percentage(field: &str) -> Option<f64> {
    field.trim().strip_suffix('%')?.parse().ok()
}
