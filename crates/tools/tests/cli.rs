use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MNEMONIC: &str = "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";
const API_KEY: &str = "0123456789abcdef0123456789abcdef";

fn write_secrets(dir: &Path) {
    let content = format!(r#"{{"mnemonic": "{MNEMONIC}", "infuraApiKey": "{API_KEY}"}}"#);
    fs::write(dir.join("secrets.json"), content).unwrap();
}

fn cli(dir: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("deploy-config").expect("Failed to locate deploy-config binary");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_fails_without_secrets_file() {
    let dir = TempDir::new().unwrap();

    cli(dir.path())
        .args(["--secrets", "missing.json", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn check_reports_loaded_configuration() {
    let dir = TempDir::new().unwrap();
    write_secrets(dir.path());

    cli(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("solc 0.6.7"));
}

#[test]
fn export_toml_is_redacted() {
    let dir = TempDir::new().unwrap();
    write_secrets(dir.path());

    cli(dir.path())
        .args(["export", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"network_id = "4""#))
        .stdout(predicate::str::contains(MNEMONIC).not())
        .stdout(predicate::str::contains(API_KEY).not());
}

#[test]
fn export_json_by_default() {
    let dir = TempDir::new().unwrap();
    write_secrets(dir.path());

    let output = cli(dir.path()).arg("export").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["networks"]["rinkeby"]["gasPrice"], 1000000000);
    assert_eq!(value["compilers"]["solc"]["version"], "0.6.7");
}

#[test]
fn show_prints_summary() {
    let dir = TempDir::new().unwrap();
    let secrets = dir.path().join("nested");
    fs::create_dir(&secrets).unwrap();
    write_secrets(&secrets);

    cli(dir.path())
        .args(["show", "--secrets"])
        .arg(secrets.join("secrets.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Network:             rinkeby"))
        .stdout(predicate::str::contains(API_KEY).not());
}
