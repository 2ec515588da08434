//! tutil CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: classify the arguments,
//! dispatch to the requested operation, and exit with appropriate status.
//! For programmatic use, prefer the library API (`tutil::api`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run(std::env::args().collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
