// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Date Modified: 2026-10-16
// Author: Lukas Bower

//! Entry point for the `inoutctl` dry-run tool.

use cohesix_inout::cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
