//! Move representation.

use crate::{Board, Cell, Square};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A chess move.
///
/// Besides the two endpoints a move carries snapshots of the piece that moves
/// and of whatever stood on the destination when the move was built. The
/// snapshots make undo possible without consulting the board.
///
/// Equality and hashing only look at the endpoints, so a move built from a
/// pair of clicked squares matches the generated move with the same squares.
#[derive(Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Cell,
    piece_captured: Cell,
}

impl Move {
    /// Creates a move, reading the moved and captured pieces from `board`.
    ///
    /// The board is not modified and the move is not validated.
    #[inline]
    pub const fn new(from: Square, to: Square, board: &Board) -> Self {
        Move {
            from,
            to,
            piece_moved: board.get(from),
            piece_captured: board.get(to),
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns what stood on the source square when the move was built.
    #[inline]
    pub const fn piece_moved(self) -> Cell {
        self.piece_moved
    }

    /// Returns what stood on the destination square when the move was built.
    #[inline]
    pub const fn piece_captured(self) -> Cell {
        self.piece_captured
    }

    /// Returns true if something stood on the destination square.
    #[inline]
    pub const fn is_capture(self) -> bool {
        !self.piece_captured.is_empty()
    }

    /// Returns the move identity: four decimal digits `from_row from_col to_row to_col`.
    #[inline]
    pub const fn id(self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinate_notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate_notation())
    }
}
