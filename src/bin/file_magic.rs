//! # file-magic
//!
//! Prints the first four bytes of a file or stream as hexadecimal.
//!
//! - Inspect a file: `file-magic archive.bin`
//! - Inspect a stream: `cat archive.bin | file-magic`

/// Entry point for the CLI tool.
fn main() {
    pkgtools::cli::file_magic::run_cli();
}
