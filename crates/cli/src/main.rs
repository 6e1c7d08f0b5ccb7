//! Headless arena simulator.
mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Run};

#[derive(Parser)]
#[command(name = "arena-cli")]
#[command(about = "Run goal-driven arena bots headless", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Simulate a match and print per-bot statistics
    Run(Run),

    /// Load and validate content files without simulating
    Check(Check),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
    }
}
