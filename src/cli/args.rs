//! CLI argument definitions using clap
//!
//! Commands:
//! - mindreader serve --dataset <csv> [--host H] [--port P]
//! - mindreader play --dataset <csv>
//! - mindreader inspect --dataset <csv>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mindreader - an adaptive twenty-questions guessing engine
#[derive(Parser, Debug)]
#[command(name = "mindreader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the webhook server
    Serve {
        /// Path to the candidate dataset CSV
        #[arg(long)]
        dataset: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Play an interactive game in the terminal
    Play {
        /// Path to the candidate dataset CSV
        #[arg(long)]
        dataset: PathBuf,
    },

    /// Print a dataset summary and exit
    Inspect {
        /// Path to the candidate dataset CSV
        #[arg(long)]
        dataset: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
