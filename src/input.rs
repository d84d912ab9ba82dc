//! Input source selection.
//!
//! Both tools read either standard input or a single named file.

use crate::error::{Result, ToolError};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

/// Where a tool reads its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Stdin when no path argument was given, the named file otherwise.
    #[must_use]
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdin, Self::File)
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "standard input".to_string(),
            Self::File(path) => format!("'{}'", path.display()),
        }
    }

    /// Open the source for reading.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Open` if the named file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Self::Stdin => {
                debug!("reading from standard input");
                Ok(Box::new(io::stdin().lock()))
            }
            Self::File(path) => {
                debug!(path = %path.display(), "opening input file");
                let file = File::open(path).map_err(|source| ToolError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }

    /// Read the whole source into memory as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Open` if the file cannot be opened, or
    /// `ToolError::Read` if reading fails.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        let mut reader = self.open()?;
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|source| ToolError::Read {
                source_name: self.name(),
                source,
            })?;
        Ok(content)
    }
}
