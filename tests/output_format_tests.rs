// Integration tests for --format json and --format csv

mod utils;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use utils::write_report;

fn fixture() -> (TempDir, TempDir) {
    let baseline = TempDir::new().unwrap();
    let new = TempDir::new().unwrap();
    write_report(
        baseline.path(),
        "perf_001",
        "homer",
        "  50.0%|5.0%|homer|homer|[.] foo\n  10.0%|1.0%|homer|homer|[.] bar\n",
    );
    write_report(
        new.path(),
        "perf_001",
        "homer",
        "  30.0%|5.0%|homer|homer|[.] foo\n  10.0%|1.0%|homer|homer|[.] bar\n",
    );
    (baseline, new)
}

fn run_format(baseline: &TempDir, new: &TempDir, format: &str) -> String {
    let output = Command::cargo_bin("perfdiff")
        .unwrap()
        .arg("--baseline")
        .arg(baseline.path())
        .arg("--new")
        .arg(new.path())
        .arg("--component")
        .arg("homer")
        .arg("--format")
        .arg(format)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_json_output_is_valid_and_ranked() {
    let (baseline, new) = fixture();
    let stdout = run_format(&baseline, &new, "json");

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["component"], "homer");
    assert_eq!(value["baseline_files"], 1);
    assert_eq!(value["functions"][0]["function"], "foo");
    assert_eq!(value["functions"][0]["baseline_pct"], 50.0);
    assert_eq!(value["functions"][0]["new_pct"], 30.0);
    assert_eq!(value["functions"][1]["function"], "bar");
}

#[test]
fn test_csv_output_has_header_and_rows() {
    let (baseline, new) = fixture();
    let stdout = run_format(&baseline, &new, "csv");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "function,baseline_pct,new_pct,delta");
    assert_eq!(lines[1], "foo,50,30,20");
    assert_eq!(lines[2], "bar,10,10,0");
}

#[test]
fn test_unknown_format_rejected() {
    Command::cargo_bin("perfdiff")
        .unwrap()
        .arg("--baseline")
        .arg("/tmp")
        .arg("--new")
        .arg("/tmp")
        .arg("--component")
        .arg("homer")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}
