//! The 8x8 board grid.

use crate::{Cell, Color, Move, Piece, Square};
use std::fmt;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess board: an 8x8 grid of [`Cell`]s.
///
/// Row 0 is Black's back rank and row 7 White's; column 0 is the a-file.
/// The board carries no turn or history, only piece placement.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, piece) in BACK_RANK.iter().enumerate() {
                board.cells[back][col] = Cell::new(color, *piece);
                board.cells[pawns][col] = Cell::new(color, Piece::Pawn);
            }
        }
        board
    }

    /// Returns the cell at `square`.
    #[inline]
    pub const fn get(&self, square: Square) -> Cell {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Sets the cell at `square`.
    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row() as usize][square.col() as usize] = cell;
    }

    /// Places a piece, returning the board (builder style, for fixtures).
    pub fn with(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.set(square, Cell::new(color, piece));
        self
    }

    /// Read-only view of the grid, indexed `[row][col]`.
    #[inline]
    pub const fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Finds the king of `color` by scanning the board.
    ///
    /// Returns `None` only for hand-built boards without that king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == Cell::new(color, Piece::King))
    }

    /// Moves `m.piece_moved` from its source to its destination in place.
    pub fn apply(&mut self, m: &Move) {
        self.set(m.from(), Cell::Empty);
        self.set(m.to(), m.piece_moved());
    }

    /// Restores both squares touched by `m` to their pre-move contents.
    pub fn revert(&mut self, m: &Move) {
        self.set(m.from(), m.piece_moved());
        self.set(m.to(), m.piece_captured());
    }

    /// Returns the board that would result from playing `m`, leaving `self` untouched.
    pub fn with_move(&self, m: &Move) -> Board {
        let mut next = *self;
        next.apply(m);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self)?;
        write!(f, ")")
    }
}
