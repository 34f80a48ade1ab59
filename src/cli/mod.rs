//! CLI module
//!
//! Provides the command-line interface:
//! - serve: load the dataset and run the webhook server
//! - play: interactive terminal game against one local session
//! - inspect: one-shot dataset summary

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{inspect, play, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_answer, write_line};
