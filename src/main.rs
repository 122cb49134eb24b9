//! `lnmc` command-line entry point.
use anyhow::Result;
use clap::Parser;

use lnmc::cli::Cli;
use lnmc::commands;
use lnmc::logging::{Logger, init_subscriber};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    init_subscriber(args.verbose);
    let log = Logger::new();

    commands::run(&args, &log)?;
    Ok(())
}
