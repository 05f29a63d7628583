//! Exit-code and error-surface tests for the `renamo` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn renamo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("renamo").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn no_arguments_shows_help_and_fails() {
    let home = TempDir::new().unwrap();
    renamo(&home).assert().code(2);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    renamo(&home).arg("explode").assert().code(2);
}

#[test]
fn version_flag_succeeds() {
    let home = TempDir::new().unwrap();
    renamo(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_root_exits_with_not_found_code() {
    let home = TempDir::new().unwrap();
    renamo(&home)
        .args([
            "apply",
            "--yes",
            "-m",
            "GD0",
            "-r",
            "BR0",
            "/renamo/no/such/dir",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid root"));
}

#[test]
fn root_that_is_a_file_exits_with_not_found_code() {
    let home = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    let file = tree.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    renamo(&home)
        .args(["apply", "--yes", "-m", "GD0", "-r", "BR0"])
        .arg(&file)
        .assert()
        .code(3);
}

#[test]
fn unpaired_match_flag_is_a_user_error() {
    let home = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();

    renamo(&home)
        .args(["apply", "--yes", "-m", "GD0"])
        .arg(tree.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--replace"));
}

#[test]
fn empty_match_substring_is_a_user_error() {
    let home = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();

    renamo(&home)
        .args(["apply", "--yes", "-m", "", "-r", "BR0"])
        .arg(tree.path())
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let home = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();

    renamo(&home)
        .args([
            "apply",
            "--yes",
            "--config",
            "/renamo/no/such/config.toml",
        ])
        .arg(tree.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn malformed_config_file_is_a_config_error() {
    let home = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "this is not toml [[[").unwrap();

    renamo(&home)
        .args(["apply", "--yes", "--config"])
        .arg(&config)
        .arg(tree.path())
        .assert()
        .code(4);
}

#[test]
fn errors_carry_suggestions() {
    let home = TempDir::new().unwrap();
    renamo(&home)
        .args([
            "apply",
            "--yes",
            "-m",
            "GD0",
            "-r",
            "BR0",
            "/renamo/no/such/dir",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn unknown_config_key_is_a_user_error() {
    let home = TempDir::new().unwrap();
    renamo(&home)
        .args(["config", "get", "no.such.key"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config list"));
}

#[test]
fn validation_fails_before_any_rename() {
    let home = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    std::fs::write(tree.path().join("GD0Scene.tres"), "x").unwrap();

    // Bad rule pairing must leave the tree untouched.
    renamo(&home)
        .args(["apply", "--yes", "-m", "GD0", "-m", "X", "-r", "BR0"])
        .arg(tree.path())
        .assert()
        .code(2);

    assert!(tree.path().join("GD0Scene.tres").exists());
}
