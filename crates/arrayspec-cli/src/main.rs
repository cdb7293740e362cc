//! Arrayspec CLI: the `arrayspec` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            root,
            api_version,
            json,
        } => commands::check::run(root, api_version, json),

        Commands::Dump { root, api_version } => commands::dump::run(root, api_version),
    }
}
