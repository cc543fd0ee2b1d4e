//! Command Line Interface (CLI) layer for TERRAMAP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for one-shot pipeline runs. It
//! wires user-provided options to the underlying library functionality
//! exposed via `terramap::api`.
//!
//! If you are embedding TERRAMAP into another application, prefer using
//! the high-level `terramap::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
