//! Shared testing harness for `make-env` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest with one downloaded tool, used where the content does not matter.
pub(crate) const JQ_CONFIG: &str = "tools:\n  jq:\n    http:\n      url: https://x/jq\n";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `make-env.yaml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        self.write_file("make-env.yaml", content);
    }

    /// Write a file relative to the work directory, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    /// Build a command for invoking the compiled `make-env` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `make-env` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("make-env").expect("Failed to locate make-env binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }
}
