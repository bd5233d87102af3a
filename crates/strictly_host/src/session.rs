//! A hosted game: two seats, their tokens, and one shared engine.

use crate::config::HostConfig;
use derive_getters::Getters;
use derive_more::Display;
use std::sync::{Arc, Mutex, MutexGuard};
use strictly_tictactoe::{GameEngine, GameError, GameSnapshot, GameStatus, PlayerId};
use tracing::{debug, info, instrument, warn};

/// A participant and the token that authorizes their moves.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Seat {
    /// Display name.
    name: String,
    /// Move-authorization token.
    token: PlayerId,
    /// Board symbol.
    mark: char,
}

/// Error surfaced by a session.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// The engine rejected the call.
    #[display("{}", _0)]
    Rejected(GameError),
    /// A previous holder of the engine lock panicked.
    #[display("Game state is unavailable: engine lock poisoned")]
    Poisoned,
}

impl From<GameError> for SessionError {
    fn from(err: GameError) -> Self {
        SessionError::Rejected(err)
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Rejected(e) => Some(e),
            SessionError::Poisoned => None,
        }
    }
}

/// One game between two seats.
///
/// The engine assumes exclusive access per call, so every operation goes
/// through a single mutex. Clones share the same game.
#[derive(Debug, Clone)]
pub struct GameSession {
    seats: [Seat; 2],
    engine: Arc<Mutex<GameEngine>>,
}

impl GameSession {
    /// Issues a fresh token for each seat and starts a game.
    #[instrument(skip(config))]
    pub fn new(config: &HostConfig) -> Result<Self, SessionError> {
        let seats = [
            Seat {
                name: config.player1_name().clone(),
                token: PlayerId::generate(),
                mark: 'X',
            },
            Seat {
                name: config.player2_name().clone(),
                token: PlayerId::generate(),
                mark: 'O',
            },
        ];
        let engine = GameEngine::with_rules(seats[0].token, seats[1].token, *config.rules())?;
        info!(
            player1 = %seats[0].name,
            player2 = %seats[1].name,
            rules = ?config.rules(),
            "Session started"
        );
        Ok(Self {
            seats,
            engine: Arc::new(Mutex::new(engine)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameEngine>, SessionError> {
        self.engine.lock().map_err(|_| {
            warn!("Engine lock poisoned");
            SessionError::Poisoned
        })
    }

    /// Both seats, first mover first.
    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }

    /// The seat holding `token`.
    pub fn seat_for(&self, token: PlayerId) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.token == token)
    }

    /// The seat whose turn it is.
    ///
    /// # Errors
    ///
    /// `Poisoned`, or `Rejected(InvariantViolation)` if the engine is waiting
    /// on an identity that holds no seat.
    pub fn seat_to_move(&self) -> Result<&Seat, SessionError> {
        let next = self.lock()?.next_player();
        self.seat_for(next).ok_or_else(|| {
            warn!(%next, "Next player holds no seat");
            SessionError::Rejected(GameError::InvariantViolation(format!(
                "Next player {} holds no seat in this session",
                next
            )))
        })
    }

    /// Applies a move for the holder of `token` and returns the new status.
    #[instrument(skip(self))]
    pub fn submit(&self, token: PlayerId, position: u8) -> Result<GameStatus, SessionError> {
        let mut engine = self.lock()?;
        match engine.apply_move(token, position) {
            Ok(()) => {
                let status = engine.status();
                debug!(%status, "Move accepted");
                Ok(status)
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                Err(e.into())
            }
        }
    }

    /// Current status.
    pub fn status(&self) -> Result<GameStatus, SessionError> {
        Ok(self.lock()?.status())
    }

    /// Plain-data copy of the game.
    pub fn snapshot(&self) -> Result<GameSnapshot, SessionError> {
        Ok(self.lock()?.snapshot())
    }

    /// Board as text, X for the first seat and O for the second.
    pub fn render_board(&self) -> Result<String, SessionError> {
        let engine = self.lock()?;
        Ok(engine
            .board()
            .render(|owner| self.seat_for(owner).map_or('?', |seat| seat.mark)))
    }

    /// Human-readable status using seat names.
    pub fn describe(&self, status: GameStatus) -> String {
        match status {
            GameStatus::InProgress => "In progress".to_string(),
            GameStatus::Complete(Some(winner)) => match self.seat_for(winner) {
                Some(seat) => format!("{} ({}) wins", seat.name, seat.mark),
                None => format!("Player {} wins", winner),
            },
            GameStatus::Complete(None) => "Draw".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn session() -> GameSession {
        GameSession::new(&HostConfig::default()).unwrap()
    }

    #[test]
    fn test_seats_get_distinct_tokens() {
        let session = session();
        let [a, b] = session.seats();
        assert_ne!(a.token(), b.token());
        assert_eq!(session.seat_to_move().unwrap(), a);
    }

    #[test]
    fn test_seat_to_move_reports_unseated_engine() {
        let session = session();
        let foreign = GameSession {
            seats: session.seats().clone(),
            engine: Arc::new(Mutex::new(
                GameEngine::new(PlayerId::generate(), PlayerId::generate()).unwrap(),
            )),
        };
        assert!(matches!(
            foreign.seat_to_move(),
            Err(SessionError::Rejected(GameError::InvariantViolation(_)))
        ));
    }

    #[test]
    fn test_submit_and_render() {
        let session = session();
        let [x, o] = session.seats().clone();
        session.submit(*x.token(), 1).unwrap();
        session.submit(*o.token(), 5).unwrap();
        assert_eq!(
            session.render_board().unwrap(),
            "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9"
        );
        assert_eq!(session.seat_to_move().unwrap(), &x);
    }

    #[test]
    fn test_rejection_is_surfaced() {
        let session = session();
        let o = session.seats()[1].clone();
        let err = session.submit(*o.token(), 5).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Rejected(GameError::NotYourTurn { .. })
        ));
    }

    #[test]
    fn test_describe_uses_seat_names() {
        let session = session();
        let [x, o] = session.seats().clone();
        let mut status = GameStatus::InProgress;
        for (seat, position) in [(&x, 1), (&o, 4), (&x, 2), (&o, 5), (&x, 3)] {
            status = session.submit(*seat.token(), position).unwrap();
        }
        assert_eq!(session.describe(status), "Player 1 (X) wins");
    }

    #[test]
    fn test_concurrent_submissions_are_serialized() {
        let session = session();
        let x = *session.seats()[0].token();

        // Every thread races for the first move; exactly one may win it.
        let handles: Vec<_> = (1..=9u8)
            .map(|position| {
                let session = session.clone();
                thread::spawn(move || session.submit(x, position).is_ok())
            })
            .collect();
        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(session.snapshot().unwrap().history.len(), 1);
    }
}
