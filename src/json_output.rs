//! JSON output format for comparison rankings
//!
//! --format json implementation

use crate::compare::{Comparison, FunctionDelta};
use anyhow::Result;
use serde::Serialize;

/// Top-level JSON document for one comparison
#[derive(Debug, Serialize)]
struct JsonComparison<'a> {
    /// Component whose reports were compared
    component: &'a str,
    /// Number of baseline report files averaged
    baseline_files: usize,
    /// Number of new-run report files averaged
    new_files: usize,
    /// Ranked functions, largest CPU-share drop first
    functions: &'a [FunctionDelta],
}

/// Render the first `top` ranked functions as pretty-printed JSON
pub fn to_json(comparison: &Comparison, top: usize) -> Result<String> {
    let end = top.min(comparison.ranking.len());
    let doc = JsonComparison {
        component: &comparison.component,
        baseline_files: comparison.baseline_files,
        new_files: comparison.new_files,
        functions: &comparison.ranking[..end],
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
