// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_husky-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A scratch working directory for one hook run.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `.husky.json` into the workspace.
    pub fn with_json(self, content: &str) -> Self {
        std::fs::write(self.dir.path().join(".husky.json"), content)
            .expect("failed to write .husky.json");
        self
    }

    /// Write a KDL application config and return its path.
    pub fn write_kdl(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("husky.kdl");
        std::fs::write(&path, content).expect("failed to write KDL config");
        path
    }

    /// Runs the binary in this workspace with the given args.
    /// Returns (stdout, stderr, exit_code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(binary_path())
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("HUSKY_LOG")
            .output()
            .expect("failed to execute binary");

        let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
        let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
        let exit_code = output.status.code().unwrap_or(-1);
        (stdout, stderr, exit_code)
    }

    /// Runs a hook with a KDL application config holding `hooks { … }`.
    pub fn run_with_kdl(&self, kdl: &str, args: &[&str]) -> (String, String, i32) {
        let config = self.write_kdl(kdl);
        let config = config.to_str().unwrap().to_string();
        let mut full = vec!["--config", config.as_str()];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

pub fn json_hooks(hooks: serde_json::Value) -> String {
    serde_json::json!({ "husky": { "hooks": hooks } }).to_string()
}
