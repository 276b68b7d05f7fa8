//! wikigraph CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use wikigraph::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
