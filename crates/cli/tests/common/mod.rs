//! Shared helpers for CLI tests.

use assert_cmd::Command;
use std::{fs, path::PathBuf};

/// Ten numbered lines, each newline-terminated.
pub const TEN: &str = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n";

pub fn lines() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lines"))
}

/// The binary as a plain process, for tests that redirect its output streams.
#[allow(dead_code)]
pub fn lines_process() -> std::process::Command {
    std::process::Command::new(env!("CARGO_BIN_EXE_lines"))
}

/// Temporary directory holding input files for one test.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn create_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}
