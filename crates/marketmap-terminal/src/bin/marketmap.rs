//! marketmap: market heatmap and portfolio dashboard for the terminal.
//!
//! Run: cargo run -p marketmap-terminal --bin marketmap -- market

use std::process::ExitCode;

use clap::Parser;
use marketmap_terminal::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("marketmap: {err}");
            ExitCode::FAILURE
        }
    }
}
