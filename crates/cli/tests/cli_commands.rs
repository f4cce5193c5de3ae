// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for dispatch, help and rendering
//!
//! These run the `ipx` binary against a throwaway home directory.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[test]
fn test_version_prints_name_and_number() {
    let env = TestEnv::new();
    env.ipx()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("ipx version {}\n", VERSION)));
}

#[test]
fn test_version_number_only() {
    let env = TestEnv::new();
    env.ipx()
        .args(["version", "--number"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", VERSION)));
}

#[test]
fn test_version_all_shows_repo_path() {
    let env = TestEnv::new();
    env.ipx()
        .args(["version", "-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env.repo().display().to_string()));
}

#[test]
fn test_tour_prints_message() {
    let env = TestEnv::new();
    env.ipx()
        .arg("tour")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello Mars"));
}

#[test]
fn test_long_help_lists_command_sections() {
    let env = TestEnv::new();
    env.ipx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Global p2p merkle-dag filesystem."))
        .stdout(predicate::str::contains("BASIC COMMANDS"))
        .stdout(predicate::str::contains("NETWORK COMMANDS"));
}

#[test]
fn test_short_help_shows_usage() {
    let env = TestEnv::new();
    env.ipx()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("ipx [--config=<config> | -c]"));
}

#[test]
fn test_no_arguments_prints_root_help() {
    let env = TestEnv::new();
    env.ipx()
        .assert()
        .success()
        .stdout(predicate::str::contains("BASIC COMMANDS"));
}

#[test]
fn test_command_long_help_includes_description() {
    let env = TestEnv::new();
    env.ipx()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adds contents of <path> to ipx"))
        .stdout(predicate::str::contains("--recursive"));
}

#[test]
fn test_namespace_without_subcommand_prints_help() {
    let env = TestEnv::new();
    env.ipx()
        .arg("block")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interact with raw blocks in the datastore."))
        .stdout(predicate::str::contains("stat"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnv::new();
    env.ipx()
        .args(["block", "frobnicate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown command 'frobnicate'"))
        .stderr(predicate::str::contains("ipx block --help"));
}

#[test]
fn test_unknown_option_fails() {
    let env = TestEnv::new();
    env.ipx()
        .args(["--badflag", "version"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown option `--badflag`"));
}

#[test]
fn test_commands_lists_full_tree() {
    let env = TestEnv::new();
    env.ipx()
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ipx\n"))
        .stdout(predicate::str::contains("ipx pin add\n"))
        .stdout(predicate::str::contains("ipx object patch add-link\n"));
}

#[test]
fn test_unavailable_subsystem_fails() {
    let env = TestEnv::new();
    env.ipx()
        .args(["add", "file.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'ipx add' is not available"))
        .stderr(predicate::str::contains("unixfs"));
}

#[test]
fn test_global_options_before_command() {
    let env = TestEnv::new();
    env.ipx()
        .args(["--api", "/ip4/127.0.0.1/tcp/5001", "-L", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ipx version"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let env = TestEnv::new();
    let missing = env.home.path().join("missing.toml");
    env.ipx()
        .args(["--config", &missing.display().to_string(), "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_malformed_repo_config_fails() {
    let env = TestEnv::new();
    env.write_config("[api\n");
    env.ipx()
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_valid_repo_config_is_accepted() {
    let env = TestEnv::new();
    env.write_config("[api]\naddress = \"/ip4/10.0.0.1/tcp/5001\"\n");
    env.ipx().arg("version").assert().success();
}

#[test]
fn test_update_without_binary_fails() {
    let env = TestEnv::new();
    env.ipx()
        .env("PATH", "")
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'ipx-update' is not installed"));
}

#[test]
fn test_debug_flag_enables_logging() {
    let env = TestEnv::new();
    env.ipx()
        .args(["--debug", "version"])
        .assert()
        .success()
        .stderr(predicate::str::contains("command trees ready"));
}

#[test]
fn test_quiet_by_default() {
    let env = TestEnv::new();
    env.ipx()
        .arg("version")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
