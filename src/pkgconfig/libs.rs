//! Libs directive parsing and rewriting.
//!
//! A `Libs:` or `Libs.private:` line keeps only its `-l`/`-L` flags; every
//! other line passes through untouched.

use pest::Parser;
use pest_derive::Parser;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

#[derive(Parser)]
#[grammar = "pkgconfig.pest"]
struct LibsParser;

/// Which directive a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DirectiveKind {
    #[serde(rename = "Libs")]
    Libs,
    #[serde(rename = "Libs.private")]
    LibsPrivate,
}

impl DirectiveKind {
    /// The literal key that starts the line, colon included.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Libs => "Libs:",
            Self::LibsPrivate => "Libs.private:",
        }
    }
}

/// A parsed directive line with its retained linker flags, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibsDirective {
    pub kind: DirectiveKind,
    pub flags: Vec<String>,
}

impl fmt::Display for LibsDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.key())?;
        for flag in &self.flags {
            write!(f, " {flag}")?;
        }
        Ok(())
    }
}

/// True for tokens that start with `-l` or `-L`.
#[must_use]
pub fn is_link_flag(token: &str) -> bool {
    token.starts_with("-l") || token.starts_with("-L")
}

/// Parse a line as a Libs directive.
///
/// Returns `None` for any line that does not start with `Libs:` or
/// `Libs.private:`.
#[must_use]
pub fn parse_directive(line: &str) -> Option<LibsDirective> {
    let libs_line = LibsParser::parse(Rule::libs_line, line).ok()?.next()?;

    let mut kind = None;
    let mut flags = Vec::new();
    for pair in libs_line.into_inner() {
        match pair.as_rule() {
            Rule::directive_field => {
                // The key field itself always starts with "Libs", never a flag.
                kind = pair.into_inner().find_map(|inner| match inner.as_rule() {
                    Rule::libs_key => Some(DirectiveKind::Libs),
                    Rule::libs_private_key => Some(DirectiveKind::LibsPrivate),
                    _ => None,
                });
            }
            Rule::token if is_link_flag(pair.as_str()) => flags.push(pair.as_str().to_string()),
            _ => {}
        }
    }

    kind.map(|kind| LibsDirective { kind, flags })
}

/// Rewrite a directive line down to its key and flags. Other lines are
/// returned unchanged.
#[must_use]
pub fn rewrite_libs_line(line: &str) -> Cow<'_, str> {
    match parse_directive(line) {
        Some(directive) => Cow::Owned(directive.to_string()),
        None => Cow::Borrowed(line),
    }
}
