//! Terminal front ends: hot-seat play and replay.

use crate::session::{GameSession, SessionError};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::GameStatus;
use tracing::{debug, info, instrument};

/// Runs a hot-seat game: both seats share one terminal and the prompt
/// always goes to the seat whose turn it is.
///
/// Returns the final status, or the current one if input ends or a player
/// types `quit`.
#[instrument(skip_all)]
pub fn run_hot_seat<R: BufRead, W: Write>(
    session: &GameSession,
    mut input: R,
    out: &mut W,
) -> Result<GameStatus> {
    let mut line = String::new();
    loop {
        writeln!(out, "\n{}\n", session.render_board()?)?;
        let status = session.status()?;
        if status.is_complete() {
            writeln!(out, "{}", session.describe(status))?;
            info!(%status, "Game finished");
            return Ok(status);
        }

        let seat = session.seat_to_move()?.clone();
        write!(out, "{} ({}) to move [1-9]: ", seat.name(), seat.mark())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(status);
        }
        let entry = line.trim();
        if matches!(entry, "q" | "quit") {
            writeln!(out, "Leaving game: {}", session.describe(status))?;
            return Ok(status);
        }

        let Ok(position) = entry.parse::<u8>() else {
            writeln!(out, "Not a position: {:?}", entry)?;
            continue;
        };
        match session.submit(*seat.token(), position) {
            Ok(_) => {}
            Err(SessionError::Rejected(e)) => writeln!(out, "Rejected: {}", e)?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Plays `positions` in order, each by the seat whose turn it is.
///
/// # Errors
///
/// Fails on the first rejected move, naming its index.
#[instrument(skip(session))]
pub fn replay(session: &GameSession, positions: &[u8]) -> Result<GameStatus> {
    let mut status = session.status()?;
    for (index, &position) in positions.iter().enumerate() {
        let token = *session.seat_to_move()?.token();
        status = session
            .submit(token, position)
            .with_context(|| format!("Move {} (position {}) was rejected", index + 1, position))?;
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfig;
    use std::io::Cursor;

    fn session() -> GameSession {
        GameSession::new(&HostConfig::default()).unwrap()
    }

    #[test]
    fn test_hot_seat_plays_to_a_win() {
        let session = session();
        let mut out = Vec::new();
        let status = run_hot_seat(&session, Cursor::new("1\n4\n2\n5\n3\n"), &mut out).unwrap();

        let winner = *session.seats()[0].token();
        assert_eq!(status, GameStatus::Complete(Some(winner)));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Player 1 (X) wins"));
        assert!(text.contains("X|X|X"));
    }

    #[test]
    fn test_hot_seat_reports_bad_input_and_continues() {
        let session = session();
        let mut out = Vec::new();
        let status = run_hot_seat(&session, Cursor::new("abc\n12\n5\n5\n"), &mut out).unwrap();

        assert_eq!(status, GameStatus::InProgress);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Not a position: \"abc\""));
        assert!(text.contains("Rejected: Position 12 is out of range"));
        assert!(text.contains("already occupied"));
        assert_eq!(session.snapshot().unwrap().history.len(), 1);
    }

    #[test]
    fn test_hot_seat_quit() {
        let session = session();
        let mut out = Vec::new();
        let status = run_hot_seat(&session, Cursor::new("quit\n"), &mut out).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert!(String::from_utf8(out).unwrap().contains("Leaving game"));
    }

    #[test]
    fn test_replay_reports_failing_move() {
        let session = session();
        let err = replay(&session, &[5, 1, 5]).unwrap_err();
        assert!(err.to_string().contains("Move 3 (position 5)"));
    }
}
