//! `file-magic` entry point logic.

use super::{PKG_VERSION, exit_with};
use crate::error::{Result, ToolError};
use crate::input::Input;
use crate::magic::{self, Magic};
use clap::Parser as ClapParser;
use std::io::{self, Write};
use std::path::PathBuf;

/// CLI arguments for file-magic.
#[derive(ClapParser, Debug)]
#[command(name = "file-magic")]
#[command(version = PKG_VERSION)]
#[command(about = "Print the first four bytes of a file as hexadecimal", long_about = None)]
struct Cli {
    /// File to inspect; standard input when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format (hex, json)
    #[arg(long, value_name = "FORMAT", default_value = "hex")]
    output_format: OutputFormatArg,
}

/// Output format for the peeked bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// Eight uppercase hex digits (default)
    Hex,
    /// JSON object with the hex string and the number of bytes read
    Json,
}

impl OutputFormatArg {
    /// Render the magic bytes in this format, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Json` if serialization fails.
    pub fn render(self, magic: &Magic) -> Result<String> {
        match self {
            Self::Hex => Ok(magic.to_string()),
            Self::Json => Ok(serde_json::to_string(magic)?),
        }
    }
}

/// Parse arguments, peek at the input and print its magic bytes.
///
/// Exits with code 2 on bad arguments and 1 on IO failures.
pub fn run_cli() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        exit_with(&err);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = Input::from_arg(cli.file.clone());
    let reader = input.open()?;
    let magic = magic::read_magic(reader).map_err(|source| ToolError::Read {
        source_name: input.name(),
        source,
    })?;

    let rendered = cli.output_format.render(&magic)?;
    writeln!(io::stdout().lock(), "{rendered}").map_err(ToolError::Write)
}
