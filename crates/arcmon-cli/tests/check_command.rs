use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn arcmon() -> Command {
    Command::cargo_bin("arcmon").expect("Failed to find arcmon binary")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Config path inside a temp dir; the file does not exist, so built-in
/// defaults apply.
fn default_config(temp: &TempDir) -> PathBuf {
    temp.path().join("arcmon.toml")
}

#[test]
fn healthy_host_reports_ok_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .arg("check")
        .arg("--input")
        .arg(fixture("agent_output_healthy.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Azure Arc state: OK - State: Connected",
        ))
        .stdout(predicate::str::contains(
            "Azure machine extension: OK - Extensions: AzureMonitorWindowsAgent, MDE.Windows",
        ));
}

#[test]
fn degraded_host_exits_with_worst_severity() {
    let temp = TempDir::new().unwrap();
    arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .arg("check")
        .arg("--input")
        .arg(fixture("agent_output_degraded.txt"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Azure Arc state: WARNING - State: Disconnected",
        ))
        .stdout(predicate::str::contains(
            "Azure machine extension: CRITICAL - Extensions: CustomScript (failed), MDE.Windows",
        ))
        .stdout(predicate::str::contains("  CustomScript (failed)"));
}

#[test]
fn undefined_state_exits_unknown() {
    let temp = TempDir::new().unwrap();
    arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .arg("check")
        .arg("--input")
        .arg(fixture("agent_output_undefined.txt"))
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "Azure Arc state: UNKNOWN - State: Pending (undefined)",
        ));
}

#[test]
fn reads_agent_output_from_stdin_by_default() {
    let temp = TempDir::new().unwrap();
    arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .arg("check")
        .write_stdin("<<<azure_arc_state>>>\nConnected\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK - State: Connected"));
}

#[test]
fn empty_input_prints_nothing_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .arg("check")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_format_emits_structured_report() {
    let temp = TempDir::new().unwrap();
    let output = arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .args(["--format", "json", "check", "--input"])
        .arg(fixture("agent_output_degraded.txt"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let services = report["services"].as_array().unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["plugin"], "arc_state");
    assert_eq!(services[0]["outcome"]["severity"], 1);
    assert_eq!(services[1]["plugin"], "machine_extension");
    assert_eq!(services[1]["outcome"]["severity"], 2);
    assert_eq!(
        services[1]["outcome"]["details"],
        "CustomScript (failed)\nMDE.Windows (succeeded)"
    );
}

#[test]
fn configured_severities_override_defaults() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("arcmon.toml");
    fs::write(&config_path, "[params.arc_state]\ndisconnected = 0\n").unwrap();

    arcmon()
        .arg("--config")
        .arg(&config_path)
        .arg("check")
        .write_stdin("<<<azure_arc_state>>>\nDisconnected\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK - State: Disconnected"));
}

#[test]
fn decoding_fault_degrades_service_to_unknown() {
    let temp = TempDir::new().unwrap();
    arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .arg("check")
        .write_stdin("<<<azure_machine_extension>>>\n{broken\n")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Failed to decode agent section"));
}

#[test]
fn missing_input_file_reports_unknown_on_stderr() {
    let temp = TempDir::new().unwrap();
    arcmon()
        .arg("--config")
        .arg(default_config(&temp))
        .args(["check", "--input"])
        .arg(temp.path().join("missing.txt"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("UNKNOWN - failed to read agent output"));
}

#[test]
fn malformed_config_reports_unknown_on_stderr() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("arcmon.toml");
    fs::write(&config_path, "[params.arc_state\n").unwrap();

    arcmon()
        .arg("--config")
        .arg(&config_path)
        .arg("check")
        .write_stdin("<<<azure_arc_state>>>\nConnected\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("UNKNOWN - failed to parse config file"));
}
