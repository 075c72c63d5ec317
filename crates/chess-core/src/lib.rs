//! Core types for chess.
//!
//! This crate provides the fundamental types used across the chess engine:
//! - [`Piece`], [`Color`] and [`Cell`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Board`] for the 8x8 grid
//! - [`Move`] for move representation

mod board;
mod color;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use mov::Move;
pub use piece::{Cell, Piece};
pub use square::{Square, SquareParseError};
