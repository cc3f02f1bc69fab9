use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tempering"))
}

fn run(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .arg("run")
        .args(args)
        .output()
        .expect("Failed to execute tempering")
}

fn assert_success(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_run_finds_target() {
    let output = run(&["--target", "500", "--spread", "100", "--seed", "42"]);
    let stdout = assert_success(&output);

    assert!(
        stdout.contains("Running tempering search"),
        "Should announce the search"
    );
    assert!(stdout.contains("Chains: 6"), "Default ladder has six chains");
    assert!(
        stdout.contains("World: 500 (score: 0)"),
        "Should report the terminal state, got: {}",
        stdout
    );
    assert!(stdout.contains("Base seed: 42"));
}

#[test]
fn test_run_fixed_step_is_deterministic() {
    let output = run(&[
        "--heats", "0,0.5,1", "--target", "30", "--step", "10", "--seed", "1",
    ]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("Success in chain 0: World: 30 (score: 0)"));
    assert!(stdout.contains("Rounds: 3"));
}

#[test]
fn test_run_negative_target() {
    let output = run(&[
        "--heats", "0,0.01", "--target", "-20", "--step", "-5", "--seed", "3",
    ]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("World: -20 (score: 0)"));
    assert!(stdout.contains("Rounds: 4"));
}

#[test]
fn test_run_verbose_prints_chain_statistics() {
    let output = run(&[
        "--heats", "0,0.5", "--target", "20", "--step", "10", "--seed", "9", "-v",
    ]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("chain 0 (heat 0): 2 steps"));
    assert!(stdout.contains("chain 1 (heat 0.5): 2 steps"));
    assert!(stdout.contains("Throughput:"));
}

#[test]
fn test_run_reads_config_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("ladder.json");
    fs::write(&config_path, r#"{ "heats": [0.0, 0.001], "seed": 77 }"#)
        .expect("Failed to write config");

    let output = run(&[
        "--config",
        config_path.to_str().unwrap(),
        "--target",
        "10",
        "--step",
        "5",
    ]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("Chains: 2"));
    assert!(stdout.contains("Base seed: 77"));
    assert!(stdout.contains("Rounds: 2"));
}

#[test]
fn test_run_rejects_chain_count_mismatch() {
    let output = run(&["--heats", "0,0.5", "--chains", "3", "--step", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Chain count is 3 but the heat ladder has 2 heats"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_run_rejects_out_of_range_heat() {
    let output = run(&["--heats", "0,1.5", "--step", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Heat 1 is 1.5, expected a value in [0, 1]"));
}

#[test]
fn test_run_rejects_non_positive_spread() {
    let output = run(&["--spread", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Mutation spread must be positive, got 0"));
}
