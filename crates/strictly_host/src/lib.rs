//! Strictly Host - reference host for the tic-tac-toe engine
//!
//! The engine leaves identity issuance, sharing and serialized access to
//! its host. This crate is a small host that does those things for a single
//! game on one terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus environment overrides
//! - **Session**: two seats, their tokens, and a mutex-guarded engine
//! - **Play**: hot-seat loop and replay over any reader/writer
//! - **CLI**: `play`, `replay`, `schema`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
mod session;

pub use cli::{Cli, Command};
pub use config::{
    ConfigError, ENV_DETECT_DRAWS, ENV_PLAYER1, ENV_PLAYER2, ENV_WIN_RULE, HostConfig,
};
pub use play::{replay, run_hot_seat};
pub use session::{GameSession, Seat, SessionError};
