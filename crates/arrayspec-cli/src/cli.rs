use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arrayspec",
    about = "Arrayspec: signature registry checks over a bundled array API specification package",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the signature registry and report a summary
    Check {
        /// Specification package root
        #[arg(long, default_value = ".")]
        root: String,

        /// Specification version to load (e.g. 2023.12)
        #[arg(long)]
        api_version: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the signature registry and print its full JSON projection
    Dump {
        /// Specification package root
        #[arg(long, default_value = ".")]
        root: String,

        /// Specification version to load (e.g. 2023.12)
        #[arg(long)]
        api_version: String,
    },
}
