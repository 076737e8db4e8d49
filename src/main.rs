// src/main.rs
use anyhow::Result;
use clap::Parser;

use percussion_analyzer::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    cli::run(&args)
}
