//! Margen Calc - agricultural margin calculator
//!
//! A CLI tool that computes gross and direct margins per crop, freight
//! tariffs by distance, sensitivity tables and campaign cash flows.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
