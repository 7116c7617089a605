//! End-to-end tests for the csvdesc binary

#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn csvdesc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_csvdesc"))
}

#[test]
fn test_yaml_report_for_each_type() {
    let output = csvdesc()
        .arg(fixture("eachtype.csv"))
        .output()
        .expect("run csvdesc");

    assert!(output.status.success());
    let report: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    let types = report[0]["types"].as_sequence().unwrap();

    let pairs: Vec<(&str, &str)> = types
        .iter()
        .map(|t| (t["field"].as_str().unwrap(), t["type"].as_str().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("BOOLEAN", "boolean"),
            ("INTEGER", "integer"),
            ("DECIMAL", "decimal"),
            ("STRING", "string"),
        ]
    );
}

#[test]
fn test_missing_file_reported_and_others_described() {
    let output = csvdesc()
        .args(["--firstn", "--samplesize", "2", "--format", "json"])
        .arg("no-such-file.csv")
        .arg(fixture("int1.csv"))
        .output()
        .expect("run csvdesc");

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No such file: no-such-file.csv"));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.as_array().unwrap().len(), 1);
    assert_eq!(report[0]["types"][0]["observations"], 2);
}

#[test]
fn test_invalid_percentage_rejected_before_reading() {
    let output = csvdesc()
        .args(["--percentage", "--samplesize", "250"])
        .arg(fixture("int1.csv"))
        .output()
        .expect("run csvdesc");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid sampling probability"));
}

#[test]
fn test_conflicting_sampling_flags() {
    let output = csvdesc()
        .args(["--firstn", "--percentage"])
        .arg(fixture("int1.csv"))
        .output()
        .expect("run csvdesc");

    assert!(!output.status.success());
}
