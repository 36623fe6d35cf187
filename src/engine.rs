//! Exhaustive minimax search for the computer opponent.
//!
//! The search explores every reachable continuation of the current board
//! (at most 9 plies, cut short by terminal positions), so the move it
//! returns is provably optimal. No pruning is needed at this board size.
//!
//! The recursive core is mark-symmetric: `player` names the maximizing
//! side. In this system the session always searches for [`Player::O`],
//! but the engine itself does not care.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Base score for a decided game, before depth adjustment.
const WIN_SCORE: i32 = 10;

/// Selects the optimal move for `player` on the given board.
///
/// Returns `None` iff the board has no empty square; callers are expected
/// to check [`Board::outcome`] first and only ask for a move while the
/// game is in progress.
///
/// Deterministic: among equally scored moves the lowest board index wins,
/// so the result is a pure function of the board state.
#[instrument(skip(board))]
pub fn choose_move(board: &Board, player: Player) -> Option<Position> {
    // Search a private copy so hypothetical placements are never visible
    // to the caller, even transiently.
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(player));
        let score = minimax(&mut scratch, player, 1, false);
        scratch.clear(pos);

        // Strict comparison: the first position to reach the best score
        // keeps it, which fixes the tie-break order.
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    if let Some(pos) = best_move {
        debug!(position = %pos, score = best_score, "selected move");
    }
    best_move
}

/// Full-depth adversarial search.
///
/// `maximizing` is true when `player` is to move, false when the opponent
/// is. Every placement is undone before returning, so the board is exactly
/// restored once the call unwinds.
fn minimax(board: &mut Board, player: Player, depth: i32, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board, player, depth) {
        return score;
    }

    let to_move = if maximizing { player } else { player.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if board.is_empty(pos) {
            board.set(pos, Square::Occupied(to_move));
            let score = minimax(board, player, depth + 1, !maximizing);
            board.clear(pos);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }

    best
}

/// Scores a terminal position from `player`'s perspective, or `None` if
/// the position is still open.
///
/// Depth-adjusted: `+10 - depth` for a win, `-10 + depth` for a loss,
/// `0` for a draw. The adjustment biases the search toward faster wins
/// and slower losses among otherwise equal lines of play.
fn terminal_score(board: &Board, player: Player, depth: i32) -> Option<i32> {
    if let Some(winner) = board.winner() {
        return Some(if winner == player {
            WIN_SCORE - depth
        } else {
            -WIN_SCORE + depth
        });
    }
    if board.is_full() {
        return Some(0);
    }
    None
}
