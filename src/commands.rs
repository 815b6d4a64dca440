use crate::cli::{Cli, Command};

pub mod info;
pub mod run;

pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run::run(args, cli.verbose),
        Command::Info(args) => info::run(args),
    }
}
