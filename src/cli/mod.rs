//! Command Line Interface (CLI) layer for romanus.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the interactive prompt and
//! batch conversion flows. It wires user-provided options to the underlying
//! library functionality exposed via `romanus::api`.
//!
//! If you are embedding romanus into another application, prefer using
//! the high-level `romanus::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
