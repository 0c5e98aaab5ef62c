//! Integration tests running the update-deployment binary end to end.
//!
//! Checks exit codes and which stream each message lands on.

use std::fs;

use crate::integration::{Workspace, FIXTURE};

#[test]
fn test_success_reports_to_stdout() {
    let ws = Workspace::with_fixture();
    let output = ws.run(&["--zkc", "0x9999", "--povw-minter", " 0x8888 "]);

    assert!(
        output.status.success(),
        "patch should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "✅ Updated deployment.toml for chain 'anvil':\n   zkc = 0x9999\n   povw-minter = 0x8888\n"
    );
    assert!(output.stderr.is_empty(), "logging is off by default");
    assert!(ws.read().contains("povw-minter = \"0x8888\""));
}

#[test]
fn test_long_values_abbreviated_in_report_only() {
    let ws = Workspace::with_fixture();
    let key: String = (0..60).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let output = ws.run(&["--chain-key", "sepolia", "--etherscan-api-key", &key]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let shown = format!("{}...{}", &key[..10], &key[50..]);
    assert!(stdout.contains(&format!("   etherscan-api-key = {}\n", shown)));
    assert!(ws.read().contains(&format!("etherscan-api-key = \"{}\"", key)));
}

#[test]
fn test_no_flags_reports_no_change() {
    let ws = Workspace::with_fixture();
    let output = ws.run(&[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ℹ️  No updates provided, deployment.toml unchanged\n"
    );
    assert_eq!(ws.read(), FIXTURE);
}

#[test]
fn test_missing_chain_lists_available_on_stderr() {
    let ws = Workspace::with_fixture();
    let output = ws.run(&["--chain-key", "base", "--zkc", "0x1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ Chain key 'base' not found in deployment.toml"));
    assert!(stderr.contains("Available chains: [\"anvil\", \"sepolia\"]"));
    assert_eq!(ws.read(), FIXTURE);
}

#[test]
fn test_missing_file_exits_one_without_creating() {
    let ws = Workspace::empty();
    let output = ws.run(&["--zkc", "0x1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ deployment.toml not found in current directory"));
    assert!(!ws.deployment_path().exists());
}

#[test]
fn test_empty_chain_key_is_rejected() {
    let ws = Workspace::with_fixture();
    let output = ws.run(&["--chain-key", "", "--zkc", "0x1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("❌ Chain key cannot be empty"));
    assert_eq!(ws.read(), FIXTURE);
}

#[test]
fn test_parse_error_has_prefix() {
    let ws = Workspace::with_contents("[deployment.anvil\n");
    let output = ws.run(&["--zkc", "0x1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("❌ Error parsing deployment.toml:"));
}

#[test]
fn test_file_flag_and_json_output() {
    let ws = Workspace::empty();
    fs::create_dir_all(ws.dir.path().join("contracts")).unwrap();
    let target = ws.dir.path().join("contracts").join("deployment.toml");
    fs::write(&target, FIXTURE).unwrap();

    let output = ws.run(&[
        "--file",
        "contracts/deployment.toml",
        "--format",
        "json",
        "--supply-calculator",
        "0x7777",
    ]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["file"], "contracts/deployment.toml");
    assert_eq!(report["updates"][0]["field"], "supply-calculator");
    assert!(fs::read_to_string(&target)
        .unwrap()
        .contains("supply-calculator = \"0x7777\""));
}

#[test]
fn test_dry_run_does_not_write() {
    let ws = Workspace::with_fixture();
    let output = ws.run(&["--dry-run", "--admin", "0x1"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout)
        .starts_with("🔍 Would update deployment.toml for chain 'anvil':"));
    assert_eq!(ws.read(), FIXTURE);
}

#[test]
fn test_settings_file_selects_target() {
    let ws = Workspace::empty();
    fs::write(ws.dir.path().join("chains.toml"), FIXTURE).unwrap();
    fs::write(
        ws.dir.path().join(".deployment-patch.toml"),
        "file = \"chains.toml\"\n",
    )
    .unwrap();

    let output = ws.run(&["--vezkc", "0x5555"]);

    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Updated chains.toml"));
    assert!(fs::read_to_string(ws.dir.path().join("chains.toml"))
        .unwrap()
        .contains("vezkc = \"0x5555\""));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let ws = Workspace::with_fixture();
    let output = ws.run(&["--verbose", "--zkc", "0x1"]);

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).trim().is_empty());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("✅ Updated"));
}
