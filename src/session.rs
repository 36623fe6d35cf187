//! Game session management: mode, names, scores, round lifecycle.
//!
//! The core game types are stateless and reentrant; everything that
//! persists across rounds (who is playing, the running score, which mode
//! was picked) lives here, owned by the UI collaborator. The session
//! never renders and never sleeps - "thinking" delays are the UI's job.

use crate::action::{Move, MoveError};
use crate::engine;
use crate::game::Game;
use crate::position::Position;
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How the session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans sharing the board.
    TwoPlayer,
    /// Human as X against the engine as O.
    VsComputer,
}

/// Win and draw tallies across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by player one (X).
    pub player_one: u32,
    /// Rounds won by player two (O).
    pub player_two: u32,
    /// Drawn rounds.
    pub draws: u32,
}

/// A multi-round session between two players.
///
/// Player one always plays X, player two (the computer in
/// [`GameMode::VsComputer`]) always plays O. Who moves first is decided
/// by a coin flip at the start of every round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    mode: GameMode,
    player_one: String,
    player_two: String,
    scores: Scores,
    game: Game,
}

impl GameSession {
    /// Creates a session with a randomly chosen starting mark.
    ///
    /// Empty or missing names fall back to "Player 1" / "Player 2"; in
    /// vs-computer mode player two is always named "Computer".
    pub fn new(mode: GameMode, player_one: Option<String>, player_two: Option<String>) -> Self {
        Self::with_starter(mode, player_one, player_two, Self::coin_flip())
    }

    /// Creates a session with an explicit starting mark.
    #[instrument]
    pub fn with_starter(
        mode: GameMode,
        player_one: Option<String>,
        player_two: Option<String>,
        starter: Player,
    ) -> Self {
        let player_one = named_or(player_one, "Player 1");
        let player_two = match mode {
            GameMode::TwoPlayer => named_or(player_two, "Player 2"),
            GameMode::VsComputer => "Computer".to_string(),
        };
        info!(?mode, %player_one, %player_two, %starter, "starting session");
        Self {
            mode,
            player_one,
            player_two,
            scores: Scores::default(),
            game: Game::starting_with(starter),
        }
    }

    /// Returns the session mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the running scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the display name for the player using the given mark.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_one,
            Player::O => &self.player_two,
        }
    }

    /// True when the engine owes the next move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.game.outcome() == Outcome::InProgress
            && self.game.to_move() == Player::O
    }

    /// Applies the current player's move and returns the round outcome.
    ///
    /// Scores are tallied automatically when the round ends.
    ///
    /// # Errors
    ///
    /// Rejects moves on finished rounds and occupied squares; in
    /// vs-computer mode a human move is also rejected while the engine
    /// owes the next move.
    #[instrument(skip(self), fields(position = %position))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::WrongPlayer(Player::O));
        }
        let player = self.game.to_move();
        let outcome = self.game.make_move(Move::new(player, position))?;
        self.record(outcome);
        Ok(outcome)
    }

    /// Runs the engine's turn: picks the optimal move, applies it, and
    /// returns the cell played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the round has ended and
    /// [`MoveError::WrongPlayer`] if it is not the computer's turn (or the
    /// session is two-player).
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self) -> Result<Position, MoveError> {
        if self.game.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(MoveError::WrongPlayer(self.game.to_move()));
        }

        // An in-progress board always has an empty square.
        let position =
            engine::choose_move(self.game.board(), Player::O).ok_or(MoveError::GameOver)?;
        let outcome = self.game.make_move(Move::new(Player::O, position))?;
        self.record(outcome);
        Ok(position)
    }

    /// Starts the next round: fresh board, new coin flip, scores kept.
    pub fn play_again(&mut self) {
        self.next_round(Self::coin_flip());
    }

    /// Starts the next round with an explicit starting mark.
    #[instrument(skip(self))]
    pub fn next_round(&mut self, starter: Player) {
        debug!(%starter, "resetting board for next round");
        self.game.reset(starter);
    }

    /// Full reset: scores zeroed and a fresh round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.scores = Scores::default();
        self.game.reset(Self::coin_flip());
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Won(Player::X) => {
                info!(winner = %self.player_one, "round won");
                self.scores.player_one += 1;
            }
            Outcome::Won(Player::O) => {
                info!(winner = %self.player_two, "round won");
                self.scores.player_two += 1;
            }
            Outcome::Draw => {
                info!("round drawn");
                self.scores.draws += 1;
            }
        }
    }

    fn coin_flip() -> Player {
        if rand::random::<bool>() {
            Player::X
        } else {
            Player::O
        }
    }
}

fn named_or(name: Option<String>, fallback: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => fallback.to_string(),
    }
}
