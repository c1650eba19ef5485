//! Integration tests for the CLI surface — argument parsing, help text, and
//! configuration errors. No network access: only commands that fail before
//! the first API call are exercised.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn ecsx() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ecsx"));
    cmd.env("NO_COLOR", "1");
    // Keep the test hermetic: no ambient credentials, no user config file.
    cmd.env_remove("ALIYUN_REGION");
    cmd.env_remove("ALIYUN_ACCESS_KEY_ID");
    cmd.env_remove("ALIYUN_ACCESS_KEY_SECRET");
    cmd.env_remove("ALIYUN_ECS_ENDPOINT");
    cmd.env("ECSX_CONFIG", "/nonexistent/ecsx/config.yaml");
    cmd
}

// --- Help and version tests ---

#[test]
fn no_args_shows_help_and_exits_two() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    ecsx().assert().code(2).stderr(predicate::str::contains(
        "Aliyun ECS command-line client",
    ));
}

#[test]
fn help_lists_the_snake_case_subcommands() {
    ecsx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("eip_addresses"))
        .stdout(predicate::str::contains("release_eip_addresses"))
        .stdout(predicate::str::contains("create_instance"))
        .stdout(predicate::str::contains("copy_image"))
        .stdout(predicate::str::contains("stop_instance"));
}

#[test]
fn version_subcommand_prints_version() {
    ecsx()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecsx 0.3.0"));
}

#[test]
fn version_subcommand_json_output() {
    ecsx()
        .arg("version")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"version":"0.3.0"}"#));
}

#[test]
fn dash_v_prints_version() {
    ecsx()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3.0"));
}

// --- Argument validation ---

#[test]
fn snapshots_requires_a_name() {
    ecsx()
        .arg("snapshots")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn create_instance_requires_its_parameters() {
    ecsx()
        .arg("create_instance")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--instance-type"));
}

#[test]
fn copy_rejects_malformed_overrides() {
    ecsx()
        .args(["copy", "-n", "web", "-p", "notakeyval"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("KEY=VAL"));
}

// --- Configuration errors ---

#[test]
fn listing_without_a_region_fails_with_guidance() {
    ecsx()
        .arg("regions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ALIYUN_REGION"));
}

#[test]
fn version_works_without_any_configuration() {
    // `version` must not require credentials or a region.
    ecsx().arg("version").assert().success();
}
