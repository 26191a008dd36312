//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's settings
//! - Settings and header fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would otherwise leak the caller's environment into a test.
const ISOLATED_VARS: [&str; 5] = [
    "VIGNA_PRESET",
    "VIGNA_OUTPUT",
    "VIGNA_TITLE",
    "VIGNA_STRICT",
    "VIGNA_LOG_MODE",
];

/// Test environment with an isolated working and settings directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as working directory
    pub temp_path: PathBuf,
    /// Path to the user settings directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The settings directory path is not created; tests that need user
    /// settings write them with [`TestEnv::write_user_settings`].
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("user-config");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a command builder running in the test directory.
    ///
    /// The user settings directory points into the test directory and the
    /// `VIGNA_*` variables of the caller are removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vigna-config").expect("Failed to find vigna-config binary");
        cmd.current_dir(&self.temp_path)
            .env("VIGNA_CONFIG_DIR", &self.config_dir);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the test directory.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }

    /// Write the project settings file `vigna.yaml`.
    pub fn write_project_settings(&self, yaml: &str) -> PathBuf {
        self.write_file("vigna.yaml", yaml)
    }

    /// Write the user settings file `config.yaml`.
    pub fn write_user_settings(&self, yaml: &str) -> PathBuf {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create settings directory");
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write user settings");
        path
    }

    /// Generate a header from `args` to stdout and return its text.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn generate_stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("generate")
            .arg("--stdout")
            .args(args)
            .output()
            .expect("Failed to run generate command");

        assert!(
            output.status.success(),
            "Generate failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
