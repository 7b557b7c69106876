//! Perfdiff - compare per-function CPU usage between two perf report runs
//!
//! This library parses gzip-compressed `perf report` output for a named
//! component across repeated profiling sessions, averages each function's
//! cumulative CPU share per run, and ranks the functions whose share
//! changed the most between a baseline run and a new run.

pub mod cli;
pub mod compare;
pub mod csv_output;
pub mod json_output;
pub mod report;
