//! `fix-pkgconfig` entry point logic.

use super::{PKG_VERSION, exit_with};
use crate::error::{Result, ToolError};
use crate::input::Input;
use crate::pkgconfig::{self, Mode};
use clap::Parser as ClapParser;
use std::io::{self, Write};
use std::path::PathBuf;

/// CLI arguments for fix-pkgconfig.
#[derive(ClapParser, Debug)]
#[command(name = "fix-pkgconfig")]
#[command(version = PKG_VERSION)]
#[command(about = "Keep only -l/-L flags on the Libs lines of a pkg-config file", long_about = None)]
#[command(override_usage = "fix-pkgconfig [OPTIONS] <PC_FILE>\n       cat <PC_FILE> | fix-pkgconfig [OPTIONS]")]
struct Cli {
    /// pkg-config file to read; standard input when omitted
    #[arg(value_name = "PC_FILE")]
    pc_file: Option<PathBuf>,

    /// Only rewrite Libs lines, without trimming, path folding or joining continuations
    #[arg(long)]
    simple: bool,

    /// Print the Libs directives found as JSON instead of the rewritten file
    #[arg(long)]
    inspect: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.simple { Mode::Simple } else { Mode::Full }
    }
}

/// Parse arguments, filter the input and write the result to stdout.
///
/// Exits with code 2 on bad arguments and 1 on IO failures.
pub fn run_cli() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        exit_with(&err);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = Input::from_arg(cli.pc_file.clone());
    // Read everything up front so a failed read never leaves partial output.
    let content = pkgconfig::decode(&input.read_bytes()?);
    let mode = cli.mode();

    let mut out = io::stdout().lock();

    if cli.inspect {
        let reports = pkgconfig::inspect(&content, mode);
        let json = serde_json::to_string_pretty(&reports)?;
        return writeln!(out, "{json}").map_err(ToolError::Write);
    }

    let lines = pkgconfig::normalize(&content, mode);
    pkgconfig::write_lines(&mut out, &lines, mode.trailing_blank()).map_err(ToolError::Write)
}
