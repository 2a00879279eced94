//! # Test Harness
//!
//! Runs the `cid` binary with an isolated home directory so tests never
//! read or write the user's configuration.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with a temporary home directory.
pub struct TestEnv {
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home dir"),
        }
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("crockid")
            .join("config")
    }

    /// Creates a config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Creates a `cid` command configured to run in the test environment.
    pub fn cid(&self) -> Command {
        let mut cmd = Command::cargo_bin("cid").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd
    }
}
