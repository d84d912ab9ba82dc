//! Error types shared by both tools.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

/// Failures surfaced to the command line.
///
/// Argument errors never reach this type; clap reports them and exits before
/// any input is touched.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The named input file could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// The input was opened but reading it failed.
    #[error("cannot read {source_name}: {source}")]
    Read {
        source_name: String,
        source: io::Error,
    },

    /// Writing to standard output failed.
    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),

    /// A JSON report could not be serialized.
    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
