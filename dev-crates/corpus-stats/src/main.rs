mod commands;
mod logging;

use clap::Parser;
use commands::Commands;

pub use logging::LogArgs;

/// corpus-stats
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
