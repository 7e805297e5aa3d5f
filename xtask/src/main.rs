mod cli;
mod commands;
mod emit;
mod lalr;

use crate::cli::{Cli, Commands, GrammarCommands};
use crate::commands::grammar::{GrammarAction, GrammarCommand};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Grammar(args) => {
            let action = match args.command {
                GrammarCommands::Generate => GrammarAction::Generate,
                GrammarCommands::Verify => GrammarAction::Verify,
            };
            let cmd = GrammarCommand::new(action);
            use crate::commands::Command as _;
            cmd.run()?;
        }
    }

    Ok(())
}
