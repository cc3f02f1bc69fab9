use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tempering"))
}

#[test]
fn test_ladder_default() {
    let output = Command::new(get_binary_path())
        .arg("ladder")
        .output()
        .expect("Failed to execute tempering");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Heat ladder (6 chains):"));
    assert!(stdout.contains("slot 0: heat 0"));
    assert!(stdout.contains("slot 1: heat 0.00001"));
    assert!(stdout.contains("slot 5: heat 0.01"));
}

#[test]
fn test_ladder_custom_heats() {
    let output = Command::new(get_binary_path())
        .args(["ladder", "--heats", "0,0.25,1", "--chains", "3"])
        .output()
        .expect("Failed to execute tempering");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Heat ladder (3 chains):"));
    assert!(stdout.contains("slot 1: heat 0.25"));
    assert!(stdout.contains("slot 2: heat 1"));
}

#[test]
fn test_ladder_rejects_missing_config() {
    let output = Command::new(get_binary_path())
        .args(["ladder", "--config", "/nonexistent/ladder.json"])
        .output()
        .expect("Failed to execute tempering");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_no_subcommand_prints_help() {
    let output = Command::new(get_binary_path())
        .output()
        .expect("Failed to execute tempering");

    assert!(!output.status.success());
}
