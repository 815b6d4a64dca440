use clap::{Parser, Subcommand};

use crate::commands::{info, run};

#[derive(Debug, Parser)]
#[command(name = "cidstamp", version)]
#[command(
    about = "Stamp IPFS content identifiers into pkginfo files",
    long_about = None
)]
pub struct Cli {
    /// Show debug logs and detailed error output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the CID of a package and write it into its pkginfo
    Run(run::Args),

    /// Describe the step's input and output variables
    Info(info::Args),
}
