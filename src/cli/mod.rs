//! Command-line front-ends.
//!
//! Each tool's argument parsing and top-level flow lives here so the thin
//! binaries under `src/bin` only have to call `run_cli`.

pub mod file_magic;
pub mod fix_pkgconfig;

use crate::error::ToolError;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Report an error on stderr and exit with code 1.
fn exit_with(err: &ToolError) -> ! {
    crate::fatal_error(&format!("Error: {err}"))
}
