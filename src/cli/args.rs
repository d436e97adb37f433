//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// rosterdb - an in-memory student-records registry
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file of students to load before entering the menu
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
