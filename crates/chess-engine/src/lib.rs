//! Chess rules engine on an 8x8 array board.
//!
//! This crate provides:
//! - [`GameState`] - board, side to move, reversible move log and terminal flags
//! - Pseudo-legal move generation per piece type
//! - Legality filtering and check, checkmate and stalemate detection
//! - Perft node counting for validating the generator
//!
//! Castling, en passant and promotion are not part of the rules implemented here.
//!
//! # Example
//!
//! ```
//! use chess_engine::GameState;
//! use chess_core::Square;
//!
//! let mut game = GameState::new();
//! println!("Legal moves from starting position: {}", game.legal_moves().len());
//!
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! game.play(e2, e4).unwrap();
//! game.undo_move();
//! ```

mod game;
pub mod movegen;

pub use game::{GameError, GameState, GameStatus};
pub use movegen::{is_in_check, is_legal, is_square_attacked, legal_moves, pseudo_legal_moves};
