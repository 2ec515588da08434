//! Command Line Interface (CLI) layer for tutil.
//!
//! This module defines argument classification (`args`), error types
//! (`errors`), and the orchestration logic (`runner`) that wires the parsed
//! command line to the library's validate/backup/transform pipeline.
//!
//! If you are embedding tutil into another application, prefer the
//! high-level `tutil::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::run;
