use clap::Parser;
use miette::Result;
use wsz::cli::{Cli, Commands};
use wsz::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Inspect(args) => wsz::cli::inspect::run(args, &printer)?,
        Commands::Export(args) => wsz::cli::export::run(args, &printer)?,
        Commands::Completions(args) => wsz::cli::completions::run(args)?,
    }

    Ok(())
}
