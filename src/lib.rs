//! # pkgtools
//!
//! Two small build helpers sharing one library:
//!
//! - `file-magic` prints the first four bytes of a file as hex.
//! - `fix-pkgconfig` strips everything but `-l`/`-L` flags from the `Libs:`
//!   and `Libs.private:` lines of pkg-config metadata.

pub mod cli;
pub mod error;
pub mod input;
pub mod magic;
pub mod pkgconfig;

pub use error::{Result, ToolError};

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
