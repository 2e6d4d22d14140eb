//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyreel binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{run_extend, run_inspect, run_storyboards};
