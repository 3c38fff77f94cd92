//! # Phonedir CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and turns a fatal error into a non-zero exit.
//! Everything the CLI does goes through `phonedir::api::DirectoryApi`; see the
//! library docs for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
