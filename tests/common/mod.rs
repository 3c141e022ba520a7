//! Common test utilities for grapebuild CLI tests.
//!
//! `TestEnv` gives every test an isolated project directory with an
//! `includes/` tree, driven through the real binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("includes")).unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write `includes/<name>.json` listing the given entries in order.
    pub fn write_manifest(&self, name: &str, entries: &[&str]) {
        let json = serde_json::to_string(entries).unwrap();
        fs::write(
            self.path().join("includes").join(format!("{}.json", name)),
            json,
        )
        .unwrap();
    }

    pub fn write_source(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.path().join("grapebuild.toml"), content).unwrap();
    }

    /// Install an executable stub script standing in for an external tool.
    #[cfg(unix)]
    pub fn write_script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.path().join(rel);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Run the grapebuild binary with the project dir as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_grapebuild"))
            .args(args)
            .current_dir(self.path())
            .output()
            .unwrap()
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path().join(rel).exists()
    }

    /// Sorted top-level directory entries, for no-new-files assertions.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
