//! Whole-game scenarios driven through the public API, the way a front end
//! uses the engine: pick two squares, build a candidate, check it against
//! the legal set, apply.

use chess_core::{Board, Cell, Color, Move, Piece, Square};
use chess_engine::{GameState, GameStatus};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Plays a move the way a click handler would, returning whether it was accepted.
fn click(game: &mut GameState, from: &str, to: &str) -> bool {
    let candidate = Move::new(sq(from), sq(to), game.board());
    let legal = game.legal_moves();
    match legal.iter().find(|m| **m == candidate) {
        Some(m) => {
            game.apply_move(*m).unwrap();
            true
        }
        None => false,
    }
}

#[test]
fn fools_mate_by_clicks() {
    let mut game = GameState::new();
    assert!(click(&mut game, "f2", "f3"));
    assert!(click(&mut game, "e7", "e5"));
    assert!(click(&mut game, "g2", "g4"));
    assert!(click(&mut game, "d8", "h4"));

    assert!(game.legal_moves().is_empty());
    assert!(game.in_checkmate());
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(game.move_log(), vec!["f2f3", "e7e5", "g2g4", "d8h4"]);
}

#[test]
fn rejected_clicks_leave_game_untouched() {
    let mut game = GameState::new();
    assert!(!click(&mut game, "e2", "e5"));
    assert!(!click(&mut game, "e7", "e5"));
    assert!(!click(&mut game, "d1", "d4"));
    assert!(!click(&mut game, "e4", "e5"));
    assert_eq!(game.board(), &Board::startpos());
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn king_cannot_step_into_attack() {
    let board = Board::empty()
        .with(sq("e4"), Color::White, Piece::King)
        .with(sq("d6"), Color::Black, Piece::Rook)
        .with(sq("h8"), Color::Black, Piece::King);
    let mut game = GameState::from_board(board, Color::White);

    assert!(!click(&mut game, "e4", "d4"));
    assert!(!click(&mut game, "e4", "d5"));
    assert!(click(&mut game, "e4", "e5"));
}

#[test]
fn must_resolve_check() {
    let board = Board::empty()
        .with(sq("e1"), Color::White, Piece::King)
        .with(sq("a2"), Color::White, Piece::Rook)
        .with(sq("e8"), Color::Black, Piece::Rook)
        .with(sq("a8"), Color::Black, Piece::King);
    let mut game = GameState::from_board(board, Color::White);
    assert!(game.in_check());

    let legal = game.legal_moves();
    // Rook moves that do not block the e-file are illegal; a2-e2 blocks.
    assert!(legal.iter().any(|m| m.to_coordinate_notation() == "a2e2"));
    assert!(!legal.iter().any(|m| m.to_coordinate_notation() == "a2a3"));
    assert!(!legal.iter().any(|m| m.to_coordinate_notation() == "e1e2"));
}

#[test]
fn capturing_the_checker_is_legal() {
    let board = Board::empty()
        .with(sq("e1"), Color::White, Piece::King)
        .with(sq("e2"), Color::Black, Piece::Queen)
        .with(sq("e4"), Color::Black, Piece::Rook)
        .with(sq("a8"), Color::Black, Piece::King);
    let mut game = GameState::from_board(board, Color::White);

    // The queen is defended by the rook, so the king cannot take it.
    assert!(game.legal_moves().is_empty());
    assert!(game.in_checkmate());

    let board = Board::empty()
        .with(sq("e1"), Color::White, Piece::King)
        .with(sq("e2"), Color::Black, Piece::Queen)
        .with(sq("a8"), Color::Black, Piece::King);
    let mut game = GameState::from_board(board, Color::White);
    assert!(click(&mut game, "e1", "e2"));
    assert_eq!(
        game.board().get(sq("e2")),
        Cell::new(Color::White, Piece::King)
    );
    assert_eq!(game.white_king_square(), Some(sq("e2")));

    game.undo_move();
    assert_eq!(
        game.board().get(sq("e2")),
        Cell::new(Color::Black, Piece::Queen)
    );
    assert_eq!(game.white_king_square(), Some(Square::E1));
}

#[test]
fn undo_past_start_is_noop() {
    let mut game = GameState::new();
    assert!(click(&mut game, "b1", "c3"));
    assert!(game.undo_move().is_some());
    assert!(game.undo_move().is_none());
    assert_eq!(game.board(), &Board::startpos());
    assert_eq!(game.legal_moves().len(), 20);
}
