use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Volt parser automation tasks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse table related tasks
    Grammar(GrammarArgs),
}

#[derive(Parser)]
pub struct GrammarArgs {
    #[command(subcommand)]
    pub command: GrammarCommands,
}

#[derive(Subcommand)]
pub enum GrammarCommands {
    /// Regenerate the LALR(1) parse table
    Generate,
    /// Check that the checked-in parse table matches the grammar
    Verify,
}
