//! # fix-pkgconfig
//!
//! Strips everything but `-l`/`-L` flags from the `Libs:` and `Libs.private:`
//! lines of a pkg-config file.
//!
//! - Filter a file: `fix-pkgconfig foo.pc`
//! - Filter a stream: `cat foo.pc | fix-pkgconfig`

/// Entry point for the CLI tool.
fn main() {
    pkgtools::cli::fix_pkgconfig::run_cli();
}
