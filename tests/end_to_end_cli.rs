//! End-to-end runs of the jobring binary.
//!
//! These drive the real executable with a millisecond time unit so a full
//! produce/consume cycle completes quickly, then check the diagnostic
//! stream and exit status.

use std::io::Write;
use std::process::Command;

fn jobring() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jobring"))
}

#[test]
fn small_scenario_runs_to_completion() {
    let output = jobring()
        .args([
            "3", "2", "2", "2",
            "--time-unit-ms", "5",
            "--timeout", "1",
            "--seed", "42",
            "--no-color",
        ])
        .output()
        .expect("binary should run");

    assert!(
        output.status.success(),
        "expected success, got {:?}",
        output.status
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Producer (1): job id"), "stderr:\n{stderr}");
    assert!(stderr.contains("no more jobs to generate"), "stderr:\n{stderr}");
    assert!(stderr.contains("no more jobs left"), "stderr:\n{stderr}");
    assert!(
        stderr.contains("4 jobs produced, 4 jobs consumed"),
        "stderr:\n{stderr}"
    );
}

#[test]
fn config_file_supplies_tuning_defaults() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "time_unit_ms = 5\ntimeout = 1\nseed = 7").unwrap();

    let output = jobring()
        .args(["2", "1", "1", "1", "--no-color"])
        .arg("--config")
        .arg(config.path())
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("1 jobs produced, 1 jobs consumed"),
        "stderr:\n{stderr}"
    );
}

#[test]
fn zero_queue_size_is_rejected() {
    let output = jobring()
        .args(["0", "2", "2", "2"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
}

#[test]
fn non_numeric_arguments_are_rejected() {
    let output = jobring()
        .args(["three", "2", "2", "2"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
}

#[test]
fn missing_config_file_fails_before_any_tasks_start() {
    let output = jobring()
        .args(["3", "2", "2", "2", "--config", "/nonexistent/jobring.toml"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read config file"), "stderr:\n{stderr}");
}
