//! Tests for the minimax engine.
//!
//! Optimal play in tic-tac-toe means:
//! - Never losing against any opponent
//! - Drawing against another optimal player
//! - Taking the fastest available win

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_engine::{Board, Game, Move, Outcome, Player, Position, Square, engine};

/// Builds a board from a 9-char layout, 'X'/'O'/anything-else-empty,
/// row-major.
fn board_from(layout: &str) -> Board {
    let mut board = Board::new();
    for (index, ch) in layout.chars().enumerate() {
        let square = match ch {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
        let pos = Position::from_index(index).expect("layout is 9 cells");
        board.set(pos, square);
    }
    board
}

#[test]
fn test_self_play_from_empty_board_draws() {
    for starter in [Player::X, Player::O] {
        let mut game = Game::starting_with(starter);
        while game.outcome() == Outcome::InProgress {
            let player = game.to_move();
            let pos = engine::choose_move(game.board(), player).expect("in-progress board");
            game.make_move(Move::new(player, pos)).expect("engine move is legal");
        }
        assert_eq!(
            game.outcome(),
            Outcome::Draw,
            "optimal self-play must draw (starter {starter})"
        );
    }
}

#[test]
fn test_engine_never_loses_to_random_opponent() {
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let starter = if seed % 2 == 0 { Player::X } else { Player::O };
        let mut game = Game::starting_with(starter);

        while game.outcome() == Outcome::InProgress {
            let player = game.to_move();
            let pos = if player == Player::O {
                let pos = engine::choose_move(game.board(), Player::O).expect("move available");
                assert!(
                    game.board().is_empty(pos),
                    "engine returned an occupied square (seed {seed})"
                );
                pos
            } else {
                let moves = Position::valid_moves(game.board());
                moves[rng.gen_range(0..moves.len())]
            };
            game.make_move(Move::new(player, pos)).expect("legal move");
        }

        assert_ne!(
            game.outcome(),
            Outcome::Won(Player::X),
            "engine (O) lost to random opponent with seed {seed}\n{}",
            game.board().display()
        );
    }
}

#[test]
fn test_empty_board_tie_break_is_first_index() {
    // Every opening holds a draw under optimal play, so all nine children
    // score 0 and the strict comparison keeps the lowest index.
    let board = Board::new();
    assert_eq!(
        engine::choose_move(&board, Player::O),
        Some(Position::TopLeft)
    );
    // Pure function of the board: repeated calls agree.
    assert_eq!(
        engine::choose_move(&board, Player::O),
        Some(Position::TopLeft)
    );
}

#[test]
fn test_takes_own_win_over_blocking() {
    // X X . / O O . / . . .  with O to move: the classic win-vs-block
    // position. Completing the middle row at index 5 ends the game one
    // ply deep (10 - 1 = 9). Blocking at index 2 still forces an O win,
    // but only three plies deep (10 - 3 = 7). Index 2 is scanned first,
    // so only the depth adjustment makes the faster win beat it.
    let board = board_from("XX.OO....");
    assert_eq!(
        engine::choose_move(&board, Player::O),
        Some(Position::MiddleRight)
    );
}

#[test]
fn test_blocks_when_it_has_no_win() {
    // X threatens the top row and O holds only the center: blocking at
    // index 2 holds the game to a draw, every other move loses.
    let board = board_from("XX..O....");
    assert_eq!(
        engine::choose_move(&board, Player::O),
        Some(Position::TopRight)
    );
}

#[test]
fn test_prefers_the_slowest_loss() {
    // X X . / . . . / O . .  with O to move is already lost: blocking at
    // index 2 lets X win by center fork three plies later (-10 + 4 = -6),
    // while anything else concedes the top row at once (-10 + 2 = -8).
    // The depth adjustment makes the engine put up the longest resistance.
    let board = board_from("XX....O..");
    assert_eq!(
        engine::choose_move(&board, Player::O),
        Some(Position::TopRight)
    );
}

#[test]
fn test_only_center_holds_a_corner_opening() {
    // After X opens in a corner, center is O's only non-losing reply;
    // indices 1-3 are scanned first but all score negative.
    let board = board_from("X........");
    assert_eq!(engine::choose_move(&board, Player::O), Some(Position::Center));
}

#[test]
fn test_full_board_yields_no_move() {
    let board = board_from("XOXOXXOXO");
    assert_eq!(board.outcome(), Outcome::Draw);
    assert_eq!(engine::choose_move(&board, Player::O), None);
}

#[test]
fn test_engine_is_mark_symmetric() {
    // The same threat pattern with marks swapped: X takes its own win at
    // index 5 just as O does in the win-vs-block position.
    let board = board_from("OO.XX....");
    assert_eq!(
        engine::choose_move(&board, Player::X),
        Some(Position::MiddleRight)
    );
}

#[test]
fn test_search_does_not_mutate_the_board() {
    let board = board_from("X...O....");
    let before = board.clone();
    let _ = engine::choose_move(&board, Player::O);
    assert_eq!(board, before);
}
