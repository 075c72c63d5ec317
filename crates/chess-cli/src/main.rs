//! Console chess - play both sides of a game in the terminal.
//!
//! Moves are entered as pairs of squares (`e2e4`). The undo command
//! (default `z`) takes back the last move.

mod config;
mod session;

use anyhow::Context;
use clap::Parser;
use config::CliConfig;
use session::Session;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Console chess - two players at one keyboard.
#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Play chess in the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the legal moves after every move
    #[arg(long)]
    show_moves: bool,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = CliConfig::load(args.config.as_deref()).context("loading configuration")?;
    if args.show_moves {
        config.show_legal_moves = true;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    let level: LevelFilter = config
        .log_level
        .parse()
        .with_context(|| format!("invalid log level '{}'", config.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting chess-cli");
    tracing::debug!(?config, "loaded configuration");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run().context("console session failed")?;
    Ok(())
}
