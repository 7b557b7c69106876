// Shared helpers for integration tests

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write a gzip-compressed report at `<dir>/<run>/<component>.perf.report.gz`
pub fn write_report(dir: &Path, run: &str, component: &str, body: &str) {
    let run_dir = dir.join(run);
    fs::create_dir_all(&run_dir).unwrap();
    let path = run_dir.join(format!("{component}.perf.report.gz"));
    let mut encoder = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
    encoder.write_all(body.as_bytes()).unwrap();
    encoder.finish().unwrap();
}
