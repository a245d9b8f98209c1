pub mod completions;
pub mod export;
pub mod inspect;

use clap::{Parser, Subcommand};

/// wsz - Classic skin archive loader
#[derive(Parser, Debug)]
#[command(name = "wsz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a skin archive and print its contents
    Inspect(inspect::InspectArgs),

    /// Export a skin's sprites and glyphs as PNG files
    Export(export::ExportArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
