//! Command-line interface for strictly_host.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::WinRule;

/// Strictly Host - play token-owned tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_host")]
#[command(about = "Reference host for the strictly_tictactoe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML host config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Win rule: wraparound or lines (overrides config)
    #[arg(long, global = true)]
    pub win_rule: Option<WinRule>,

    /// End the game as a draw when the board fills (overrides config)
    #[arg(long, global = true, overrides_with = "no_detect_draws")]
    pub detect_draws: bool,

    /// Keep playing on a full board with no winner (overrides config)
    #[arg(long, global = true, overrides_with = "detect_draws")]
    pub no_detect_draws: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Draw detection requested on the command line, if either flag was given.
    pub fn draw_override(&self) -> Option<bool> {
        match (self.detect_draws, self.no_detect_draws) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game on this terminal
    Play,

    /// Apply a list of positions and print the result
    Replay {
        /// Positions 1-9, comma separated, first player first
        #[arg(value_delimiter = ',', required = true)]
        positions: Vec<u8>,

        /// Print the game snapshot as JSON instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON schema of a game snapshot
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from([
            "strictly_host",
            "replay",
            "1,4,2",
            "--json",
            "--win-rule",
            "lines",
        ]);
        assert_eq!(cli.win_rule, Some(WinRule::Lines));
        match cli.command {
            Command::Replay { positions, json } => {
                assert_eq!(positions, vec![1, 4, 2]);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_draw_flags_override_either_way() {
        let parse = |args: &[&str]| Cli::parse_from(args).draw_override();
        assert_eq!(parse(&["strictly_host", "play"]), None);
        assert_eq!(parse(&["strictly_host", "--detect-draws", "play"]), Some(true));
        assert_eq!(parse(&["strictly_host", "play", "--no-detect-draws"]), Some(false));
        // Last flag wins
        assert_eq!(
            parse(&["strictly_host", "--detect-draws", "--no-detect-draws", "play"]),
            Some(false)
        );
    }

    #[test]
    fn test_rejects_unknown_rule() {
        assert!(Cli::try_parse_from(["strictly_host", "--win-rule", "spiral", "play"]).is_err());
    }
}
