use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vecview-cmd")]
#[command(about = "Command-line walkthroughs of shared-buffer view semantics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through view construction and re-slicing rules
    Slicing,

    /// Walk through append growth and reallocation
    Append,

    /// Walk through buffer aliasing between views
    Aliasing,

    /// Run every walkthrough in order
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slicing => commands::slicing::run(),
        Commands::Append => commands::append::run(),
        Commands::Aliasing => commands::aliasing::run(),
        Commands::All => {
            commands::slicing::run()?;
            commands::append::run()?;
            commands::aliasing::run()
        }
    }
}
