//! Strictly Host - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_host::{Cli, Command, GameSession, HostConfig, replay, run_hot_seat};
use strictly_tictactoe::{GameSnapshot, Rules};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Game output owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    debug!(?config, "Effective configuration");

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { positions, json } => run_replay(&config, &positions, json),
        Command::Schema => run_schema(),
    }
}

/// Config file and environment, then command-line flags on top.
fn load_config(cli: &Cli) -> Result<HostConfig> {
    let config = HostConfig::load(cli.config.as_deref())?;
    let rules = Rules {
        win_rule: cli.win_rule.unwrap_or(config.rules().win_rule),
        detect_draws: cli.draw_override().unwrap_or(config.rules().detect_draws),
    };
    Ok(config.with_rules(rules))
}

/// Run a hot-seat game on stdin/stdout
fn run_play(config: &HostConfig) -> Result<()> {
    let session = GameSession::new(config)?;
    info!("Starting hot-seat game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_hot_seat(&session, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Apply positions and print the outcome
fn run_replay(config: &HostConfig, positions: &[u8], json: bool) -> Result<()> {
    let session = GameSession::new(config)?;
    let status = replay(&session, positions)?;

    if json {
        let snapshot = session.snapshot()?;
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?
        );
    } else {
        println!("{}\n", session.render_board()?);
        println!("{}", session.describe(status));
    }
    Ok(())
}

/// Print the snapshot JSON schema
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(GameSnapshot);
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?
    );
    Ok(())
}
