//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Job with one input volume
pub const HELLO_JOB: &str = r#"{
  "job_id": "job-hello",
  "inputs": [{ "cid": "QmHelloWorld", "path": "/inputs" }]
}"#;

/// Job with no input volumes
pub const STATELESS_JOB: &str = r#"{ "job_id": "job-bare" }"#;

/// A scratch node: config dir, content dir and job files live here
pub struct Node {
    dir: TempDir,
}

impl Node {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the node root, creating parent directories
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Write `node.toml` and return its path
    pub fn config(&self, toml: &str) -> PathBuf {
        self.file("node.toml", toml)
    }

    /// A `bidgate` invocation isolated from the user's config and log settings
    pub fn bidgate(&self) -> Cli {
        let mut cmd = Command::cargo_bin("bidgate").unwrap();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("HOME", self.path())
            .env_remove("BIDGATE_LOG");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> Outcome {
        Outcome(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Outcome {
        Outcome(self.cmd.assert().failure())
    }
}

pub struct Outcome(Assert);

impl Outcome {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).to_string()
    }

    /// Exact stdout, minus the trailing newline
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout().trim_end(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        Outcome(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Outcome(self.0.stderr(predicate::str::contains(needle)))
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        Outcome(self.0.stderr(predicate::str::contains(needle).not()))
    }
}
