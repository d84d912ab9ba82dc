//! pkg-config metadata normalization
//!
//! Rewrites `Libs:`/`Libs.private:` lines so that only `-l` and `-L` flags
//! survive. The full pipeline first trims, folds and joins physical lines:
//!
//! ```text
//! lines -> trim -> fold lib/../lib -> join "\" continuations -> rewrite Libs
//! ```
//!
//! The simple pipeline only rewrites.
//!
//! Input is handled as bytes: [`decode`] gives a lossless one-char-per-byte
//! view that the stages work on, and [`write_lines`] turns it back into the
//! original bytes.

mod bytes;
mod libs;
mod preprocessing;

pub use bytes::{decode, encode, physical_lines};

pub use libs::{DirectiveKind, LibsDirective, is_link_flag, parse_directive, rewrite_libs_line};
pub use preprocessing::{fold_redundant_paths, join_continuations, trim_trailing};

use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

/// Which variant of the normalizer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Trim, fold paths and join continuations before rewriting.
    #[default]
    Full,
    /// Rewrite each physical line as-is.
    Simple,
}

impl Mode {
    /// Whether output ends with an extra blank line.
    #[must_use]
    pub fn trailing_blank(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// A directive found during inspection, with its 1-based position in the
/// joined line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveReport {
    pub line: usize,
    #[serde(flatten)]
    pub directive: LibsDirective,
}

/// Produce the logical lines the rewriter sees, without rewriting them.
fn logical_lines(input: &str, mode: Mode) -> Vec<String> {
    match mode {
        Mode::Simple => physical_lines(input).map(str::to_string).collect(),
        Mode::Full => {
            let mut lines: Vec<String> = physical_lines(input)
                .map(|line| fold_redundant_paths(trim_trailing(line)))
                .collect();
            join_continuations(&mut lines);
            lines
        }
    }
}

/// Normalize a whole pkg-config file.
#[must_use]
pub fn normalize(input: &str, mode: Mode) -> Vec<String> {
    let lines: Vec<String> = logical_lines(input, mode)
        .iter()
        .map(|line| rewrite_libs_line(line).into_owned())
        .collect();
    debug!(
        ?mode,
        input_lines = physical_lines(input).count(),
        output_lines = lines.len(),
        "normalized pkg-config metadata"
    );
    lines
}

/// List every Libs directive with the flags it would keep.
#[must_use]
pub fn inspect(input: &str, mode: Mode) -> Vec<DirectiveReport> {
    logical_lines(input, mode)
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            parse_directive(line).map(|directive| DirectiveReport {
                line: index + 1,
                directive,
            })
        })
        .collect()
}

/// Write lines one per row, optionally followed by a blank line.
///
/// Lines are in the [`decode`] view and are written back as the bytes they
/// came from.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String], trailing_blank: bool) -> io::Result<()> {
    for line in lines {
        out.write_all(&encode(line))?;
        out.write_all(b"\n")?;
    }
    if trailing_blank {
        out.write_all(b"\n")?;
    }
    out.flush()
}
