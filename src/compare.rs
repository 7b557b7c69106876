//! Run comparison between a baseline and a new set of profiling sessions
//!
//! Locates every `perf_*/<component>.perf.report.gz` under each run
//! directory, averages per-function cumulative CPU share across the run's
//! files, and ranks the union of functions by how much share they lost
//! between baseline and new.

use crate::report::{ReportParser, StackObservations};
use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// One ranked function with its per-run average CPU share
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDelta {
    pub function: String,
    pub baseline_pct: f64,
    pub new_pct: f64,
    /// `baseline_pct - new_pct`; positive means the function got cheaper
    pub delta: f64,
}

impl FunctionDelta {
    /// Render one ranking line in the classic report format
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {}% CPU in baseline, {}% in new release",
            self.function,
            format_pct(self.baseline_pct),
            format_pct(self.new_pct)
        )
    }
}

/// Full comparison result, ranked by descending delta
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub component: String,
    pub baseline_files: usize,
    pub new_files: usize,
    pub ranking: Vec<FunctionDelta>,
}

/// Compare the baseline and new runs for one component.
///
/// Any unreadable or unparsable report file aborts the whole comparison;
/// there are no partial results.
pub fn compare_runs(component: &str, baseline_dir: &Path, new_dir: &Path) -> Result<Comparison> {
    let parser = ReportParser::new();

    let (baseline_stacks, baseline_files) = collect_run(&parser, baseline_dir, component)?;
    let (new_stacks, new_files) = collect_run(&parser, new_dir, component)?;

    let baseline_avg = average_per_file(&baseline_stacks, baseline_files);
    let new_avg = average_per_file(&new_stacks, new_files);

    Ok(Comparison {
        component: component.to_string(),
        baseline_files,
        new_files,
        ranking: rank(&baseline_avg, &new_avg),
    })
}

/// Glob pattern selecting one component's reports under a run directory
fn report_pattern(dir: &Path, component: &str) -> String {
    format!("{}/perf_*/{}.perf.report.gz", dir.display(), component)
}

/// Parse every report file for one run, returning the accumulated
/// observations and the number of files found.
fn collect_run(
    parser: &ReportParser,
    dir: &Path,
    component: &str,
) -> Result<(StackObservations, usize)> {
    let pattern = report_pattern(dir, component);

    let mut files = Vec::new();
    for entry in
        glob::glob(&pattern).with_context(|| format!("invalid report pattern {pattern}"))?
    {
        files.push(entry.with_context(|| {
            format!("failed to read a directory entry under {}", dir.display())
        })?);
    }

    if files.is_empty() {
        bail!("no report files found matching {pattern}");
    }
    debug!(run = %dir.display(), files = files.len(), "located report files");

    let mut stacks = StackObservations::new();
    for path in &files {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let reader = BufReader::new(GzDecoder::new(file));
        let rows = parser
            .parse(reader, &mut stacks)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(file = %path.display(), rows, "parsed report");
    }

    Ok((stacks, files.len()))
}

/// Average each function's summed share over the number of files in the run,
/// not the number of files the function appeared in: a function missing from
/// a file counts as 0% there.
fn average_per_file(stacks: &StackObservations, file_count: usize) -> HashMap<String, f64> {
    stacks
        .iter()
        .map(|(function, obs)| (function.clone(), obs.iter().sum::<f64>() / file_count as f64))
        .collect()
}

/// Rank the union of both runs' functions by `baseline - new`, largest drop
/// in CPU share first. A function absent from one run reads as 0.0 there.
/// Ties break on function name so identical inputs always print identically.
fn rank(baseline: &HashMap<String, f64>, new: &HashMap<String, f64>) -> Vec<FunctionDelta> {
    let functions: BTreeSet<&String> = baseline.keys().chain(new.keys()).collect();

    let mut ranking: Vec<FunctionDelta> = functions
        .into_iter()
        .map(|function| {
            let baseline_pct = baseline.get(function).copied().unwrap_or(0.0);
            let new_pct = new.get(function).copied().unwrap_or(0.0);
            FunctionDelta {
                function: function.clone(),
                baseline_pct,
                new_pct,
                delta: baseline_pct - new_pct,
            }
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.delta
            .partial_cmp(&a.delta)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.function.cmp(&b.function))
    });
    ranking
}

/// Percentages always render with a decimal part: `50.0`, not `50`
fn format_pct(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
