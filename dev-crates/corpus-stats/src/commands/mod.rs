use crate::commands::stats::StatsArgs;

pub mod stats;

/// Subcommands for corpus-stats
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load a corpus directory and report statistics.
    Stats(StatsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Stats(cmd) => cmd.run(),
        }
    }
}
