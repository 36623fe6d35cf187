//! Validated game surface: move application, turn alternation, outcome.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single round of tic-tac-toe.
///
/// Owns the board, tracks whose turn it is and the derived outcome, and
/// records the move history. All mutation during normal play goes through
/// [`Game::make_move`]; the board is never cleared cell-by-cell from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with the given player to move first.
    pub fn starting_with(player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: player,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a validated move and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round has already ended.
    /// - [`MoveError::WrongPlayer`] if it is not the mover's turn.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mv.player() != self.to_move {
            return Err(MoveError::WrongPlayer(mv.player()));
        }
        if self.board.is_occupied(mv.position()) {
            return Err(MoveError::SquareOccupied(mv.position()));
        }

        self.board.set(mv.position(), Square::Occupied(mv.player()));
        self.history.push(mv);
        self.outcome = self.board.outcome();
        if self.outcome == Outcome::InProgress {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.outcome)
    }

    /// Applies a move by raw cell index (0-8).
    ///
    /// Convenience entry point for callers working with indices instead of
    /// [`Position`]; an out-of-range index is reported as
    /// [`MoveError::OutOfBounds`].
    pub fn make_move_at(&mut self, player: Player, index: usize) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.make_move(Move::new(player, position))
    }

    /// Resets the round: empty board, fresh history, given starter.
    ///
    /// Used for "play again" between rounds; scores live outside the game.
    #[instrument(skip(self))]
    pub fn reset(&mut self, starting_player: Player) {
        *self = Self::starting_with(starting_player);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        game.make_move(Move::new(Player::X, Position::Center)).unwrap();
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_index_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move_at(Player::X, 9),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_reset_restores_empty_board() {
        let mut game = Game::new();
        game.make_move(Move::new(Player::X, Position::TopLeft)).unwrap();
        game.reset(Player::O);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::O);
        assert!(game.history().is_empty());
    }
}
