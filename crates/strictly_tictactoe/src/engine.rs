//! The game state machine.
//!
//! A [`GameEngine`] owns the board and the turn order. It is mutated only by
//! [`GameEngine::apply_move`], which validates completely before touching any
//! state, so a rejected move leaves the engine untouched.

use crate::action::Move;
use crate::board::Board;
use crate::contracts::LegalMove;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::error::GameError;
use crate::player::PlayerId;
use crate::position::{Cell, Position};
use crate::rules::{self, Rules};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Completion status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// Terminal. Holds the winner, or `None` for a draw.
    Complete(Option<PlayerId>),
}

impl GameStatus {
    /// True once the game is terminal.
    pub fn is_complete(&self) -> bool {
        matches!(self, GameStatus::Complete(_))
    }

    /// The winner, if the game ended with one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Complete(winner) => *winner,
            GameStatus::InProgress => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Complete(Some(winner)) => write!(f, "Player {} wins", winner),
            GameStatus::Complete(None) => write!(f, "Draw"),
        }
    }
}

/// Two-player tic-tac-toe engine keyed on player identities.
///
/// Invariants:
/// - `player1 != player2`, both fixed at creation
/// - `next_player` is always one of the two players
/// - marked cells are never cleared
/// - once `status` is `Complete`, nothing changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) player1: PlayerId,
    pub(crate) player2: PlayerId,
    pub(crate) next_player: PlayerId,
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
    pub(crate) rules: Rules,
}

impl GameEngine {
    /// Creates a game with the default rules. `player1` moves first.
    ///
    /// # Errors
    ///
    /// Returns `GameError::DuplicatePlayer` if both identities are equal.
    pub fn new(player1: PlayerId, player2: PlayerId) -> Result<Self, GameError> {
        Self::with_rules(player1, player2, Rules::default())
    }

    /// Creates a game with explicit rules.
    #[instrument]
    pub fn with_rules(player1: PlayerId, player2: PlayerId, rules: Rules) -> Result<Self, GameError> {
        if player1 == player2 {
            return Err(GameError::DuplicatePlayer(player1));
        }
        info!(%player1, %player2, "Creating game");
        Ok(Self {
            player1,
            player2,
            next_player: player1,
            board: Board::empty(),
            status: GameStatus::InProgress,
            history: Vec::new(),
            rules,
        })
    }

    /// Applies one move for `mover` at position number `position` (1-9).
    ///
    /// Checks, in order: turn ownership, game not over, position in range,
    /// cell empty. On success the cell is marked, the turn passes to the
    /// other player and win detection runs around the placed cell.
    ///
    /// # Errors
    ///
    /// `NotYourTurn`, `GameAlreadyOver`, `InvalidPosition` or `CellOccupied`.
    /// The engine is unchanged on error.
    #[instrument(skip(self), fields(next_player = %self.next_player))]
    pub fn apply_move(&mut self, mover: PlayerId, position: u8) -> Result<(), GameError> {
        let position = LegalMove::check(self, mover, position)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let cell = position.cell();
        self.board.set(cell.row(), cell.col(), mover)?;
        self.history.push(Move::new(mover, position));
        self.next_player = self.opponent_of(mover);
        self.status = self.evaluate(cell, mover);
        debug!(%position, status = %self.status, "Move applied");

        // Postconditions in debug builds only
        #[cfg(debug_assertions)]
        {
            if let Err(violation) = MoveContract::post(&before, self) {
                *self = before;
                return Err(violation);
            }
        }

        Ok(())
    }

    /// Applies a recorded move.
    pub fn play(&mut self, action: Move) -> Result<(), GameError> {
        self.apply_move(action.player, action.position.number())
    }

    /// Status after the mark at `cell` by `mark`.
    fn evaluate(&self, cell: Cell, mark: PlayerId) -> GameStatus {
        if rules::completes_line(&self.board, cell, mark, self.rules.win_rule) {
            info!(winner = %mark, "Game won");
            GameStatus::Complete(Some(mark))
        } else if self.rules.detect_draws && rules::is_full(&self.board) {
            info!("Game drawn");
            GameStatus::Complete(None)
        } else {
            GameStatus::InProgress
        }
    }

    /// Rebuilds a game by playing `positions` in order, alternating movers.
    ///
    /// # Errors
    ///
    /// The first rejected move's error.
    #[instrument]
    pub fn replay(
        player1: PlayerId,
        player2: PlayerId,
        rules: Rules,
        positions: &[u8],
    ) -> Result<Self, GameError> {
        let mut engine = Self::with_rules(player1, player2, rules)?;
        for &position in positions {
            engine.apply_move(engine.next_player, position)?;
        }
        Ok(engine)
    }

    /// The other seat.
    pub fn opponent_of(&self, player: PlayerId) -> PlayerId {
        if player == self.player1 {
            self.player2
        } else {
            self.player1
        }
    }

    /// First player.
    pub fn player1(&self) -> PlayerId {
        self.player1
    }

    /// Second player.
    pub fn player2(&self) -> PlayerId {
        self.player2
    }

    /// Identity that must move next.
    pub fn next_player(&self) -> PlayerId {
        self.next_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True iff the game is terminal.
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// The winner, once there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Rules this game is played under.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Positions the next player may choose; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_complete() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }
}
