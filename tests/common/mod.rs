//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Binary name of the pkg-config filter
pub const FIX_PKGCONFIG: &str = "fix-pkgconfig";

/// Binary name of the magic-byte peeker
pub const FILE_MAGIC: &str = "file-magic";

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper to get the compiled binary path
pub fn get_binary_path(name: &str) -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push(format!("{name}{}", env::consts::EXE_SUFFIX));

    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", name])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build {name} binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to write a fixture file in a directory and return its path
pub fn write_fixture(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Run a binary with `input` piped to its stdin
pub fn run_with_stdin(binary: &Path, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().expect("Failed to wait for command")
}
