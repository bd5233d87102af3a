//! Host configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{Rules, WinRule};
use tracing::{debug, info, instrument};

/// Environment variable overriding the first seat's name.
pub const ENV_PLAYER1: &str = "STRICTLY_PLAYER1";
/// Environment variable overriding the second seat's name.
pub const ENV_PLAYER2: &str = "STRICTLY_PLAYER2";
/// Environment variable overriding the win rule (`wraparound` or `lines`).
pub const ENV_WIN_RULE: &str = "STRICTLY_WIN_RULE";
/// Environment variable overriding draw detection (`true` or `false`).
pub const ENV_DETECT_DRAWS: &str = "STRICTLY_DETECT_DRAWS";

/// Configuration for a hosted game.
///
/// ```toml
/// player1_name = "Alice"
/// player2_name = "Bob"
///
/// [rules]
/// win-rule = "lines"
/// detect-draws = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Display name of the first seat (moves first, plays X).
    player1_name: String,

    /// Display name of the second seat (plays O).
    player2_name: String,

    /// Rules handed to the engine.
    rules: Rules,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            rules: Rules::default(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if given (defaults otherwise), then applies
    /// environment overrides.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, keyed by the `ENV_*` names.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = lookup(ENV_PLAYER1) {
            self.player1_name = name;
        }
        if let Some(name) = lookup(ENV_PLAYER2) {
            self.player2_name = name;
        }
        if let Some(rule) = lookup(ENV_WIN_RULE) {
            self.rules.win_rule = rule.trim().parse::<WinRule>().map_err(|_| {
                ConfigError::new(format!("{} must be wraparound or lines, got {:?}", ENV_WIN_RULE, rule))
            })?;
        }
        if let Some(flag) = lookup(ENV_DETECT_DRAWS) {
            self.rules.detect_draws = flag.trim().parse::<bool>().map_err(|_| {
                ConfigError::new(format!("{} must be true or false, got {:?}", ENV_DETECT_DRAWS, flag))
            })?;
        }
        Ok(self)
    }

    /// Replaces the rules.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
