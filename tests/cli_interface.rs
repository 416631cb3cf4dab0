use std::process::{Command, Stdio};

#[test]
fn test_help_lists_flags() {
    let bin = env!("CARGO_BIN_EXE_barkyard");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("--json"),
        "help output should mention the --json summary mode; got:\n{}",
        stdout
    );
    assert!(
        stdout.contains("--verbose"),
        "help output should mention --verbose; got:\n{}",
        stdout
    );
}

#[test]
fn test_json_summary_reports_seeded_roster() {
    let bin = env!("CARGO_BIN_EXE_barkyard");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin)
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["facility"]["name"], "Paws & Play");
    assert_eq!(summary["dog_count"], 4);
    assert_eq!(summary["owner_count"], 2);
    assert_eq!(summary["dogs"].as_array().unwrap().len(), 4);
    assert_eq!(summary["owners"][0]["dogs_registered"][0], "D001");
}

#[test]
fn test_json_summary_respects_config_file() {
    let bin = env!("CARGO_BIN_EXE_barkyard");
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("barkyard.toml"),
        "[facility]\nname = \"Happy Hounds\"\n",
    )
    .unwrap();

    let output = Command::new(bin)
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["facility"]["name"], "Happy Hounds");
    // Unset keys keep their defaults.
    assert_eq!(summary["facility"]["address"], "456 Park Ave, Dogtown");
}

#[test]
fn test_non_terminal_run_exits_cleanly() {
    let bin = env!("CARGO_BIN_EXE_barkyard");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin)
        .stdin(Stdio::null())
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("No terminal attached."),
        "expected the non-interactive hint; got:\n{}",
        stdout
    );
}
