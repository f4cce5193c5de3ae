// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary home directory with an (empty) repository under it.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(home.path().join(".ipx")).expect("Failed to create repo dir");
        Self { home }
    }

    pub fn repo(&self) -> std::path::PathBuf {
        self.home.path().join(".ipx")
    }

    /// Write `body` as the repository's config.toml.
    pub fn write_config(&self, body: &str) {
        fs::write(self.repo().join("config.toml"), body).expect("Failed to write config");
    }

    /// `ipx` isolated from the caller's home, repo and log settings.
    pub fn ipx(&self) -> Command {
        ipx_in(self.home.path())
    }
}

pub fn ipx_in(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ipx").expect("ipx binary");
    cmd.env("HOME", home)
        .env("IPX_PATH", home.join(".ipx"))
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}
