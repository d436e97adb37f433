//! rosterdb CLI entry point
//!
//! Minimal entrypoint: argument parsing, menu serving and error reporting
//! all live in the CLI module.

use rosterdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
