//! Game state management with a reversible move log.
//!
//! [`GameState`] owns the board, the side to move, the stack of applied
//! moves and the terminal flags refreshed by [`GameState::legal_moves`].

use crate::movegen;
use chess_core::{Board, Cell, Color, Move, Square};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The source square of the move is empty.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the source square belongs to the side not on move.
    #[error("{piece} on {square} cannot move: it is {turn}'s turn")]
    NotYourTurn {
        square: Square,
        piece: Cell,
        turn: Color,
    },
    /// The board changed since the move was built.
    #[error("move {0} was built from a different board")]
    StaleMove(Move),
    /// The move is not in the legal move set.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// Summary of the terminal flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// A chess game in progress.
///
/// King locations are not cached: [`GameState::king_square`] scans the
/// board, so they can never drift from the actual placement after undo.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    history: Vec<Move>,
    in_checkmate: bool,
    in_stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            history: Vec::new(),
            in_checkmate: false,
            in_stalemate: false,
        }
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the move log in coordinate notation.
    pub fn move_log(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|m| m.to_coordinate_notation())
            .collect()
    }

    /// Returns where `color`'s king stands.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.king_square(color)
    }

    pub fn white_king_square(&self) -> Option<Square> {
        self.king_square(Color::White)
    }

    pub fn black_king_square(&self) -> Option<Square> {
        self.king_square(Color::Black)
    }

    /// True if the last [`legal_moves`](Self::legal_moves) call found checkmate.
    pub fn in_checkmate(&self) -> bool {
        self.in_checkmate
    }

    /// True if the last [`legal_moves`](Self::legal_moves) call found stalemate.
    pub fn in_stalemate(&self) -> bool {
        self.in_stalemate
    }

    /// Returns the terminal flags as a [`GameStatus`].
    ///
    /// Like the flags themselves, only current after [`legal_moves`](Self::legal_moves).
    pub fn status(&self) -> GameStatus {
        if self.in_checkmate {
            GameStatus::Checkmate {
                winner: self.turn.opposite(),
            }
        } else if self.in_stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    /// Applies a move without checking legality.
    ///
    /// Callers are expected to pass moves taken from [`legal_moves`](Self::legal_moves).
    /// Moves that would corrupt the board (empty source, wrong side, or
    /// snapshots that no longer match) are rejected and nothing changes.
    pub fn apply_move(&mut self, m: Move) -> Result<(), GameError> {
        let source = self.board.get(m.from());
        match source.color() {
            None => return Err(GameError::EmptySquare(m.from())),
            Some(color) if color != self.turn => {
                return Err(GameError::NotYourTurn {
                    square: m.from(),
                    piece: source,
                    turn: self.turn,
                });
            }
            Some(_) => {}
        }
        if source != m.piece_moved() || self.board.get(m.to()) != m.piece_captured() {
            return Err(GameError::StaleMove(m));
        }

        self.board.apply(&m);
        self.history.push(m);
        self.turn = self.turn.opposite();
        if m.is_capture() {
            debug!(
                mv = %m,
                captured = %m.piece_captured(),
                ply = self.history.len(),
                "applied capture"
            );
        } else {
            debug!(mv = %m, ply = self.history.len(), "applied move");
        }
        Ok(())
    }

    /// Takes back the last move, returning it. Does nothing on an empty history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.history.pop()?;
        self.board.revert(&m);
        self.turn = self.turn.opposite();
        debug!(mv = %m, ply = self.history.len(), "undid move");
        Some(m)
    }

    /// Builds a move from two squares and applies it if it is legal.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        let candidate = Move::new(from, to, &self.board);
        if !self.legal_moves().contains(&candidate) {
            return Err(GameError::IllegalMove(candidate));
        }
        self.apply_move(candidate)?;
        Ok(candidate)
    }

    /// Generates pseudo-legal moves for the side to move.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        movegen::pseudo_legal_moves(&self.board, self.turn)
    }

    /// Generates legal moves for the side to move and refreshes the
    /// checkmate and stalemate flags.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let moves = movegen::legal_moves(&self.board, self.turn);
        trace!(turn = %self.turn, count = moves.len(), "generated legal moves");

        if moves.is_empty() {
            let check = self.in_check();
            self.in_checkmate = check;
            self.in_stalemate = !check;
            if check {
                debug!(loser = %self.turn, "checkmate");
            } else {
                debug!(turn = %self.turn, "stalemate");
            }
        } else {
            self.in_checkmate = false;
            self.in_stalemate = false;
        }
        moves
    }

    /// Returns true if the side to move's king is attacked.
    pub fn in_check(&self) -> bool {
        self.king_square(self.turn)
            .is_some_and(|king| self.square_under_attack(king))
    }

    /// Returns true if the opponent of the side to move attacks `square`.
    pub fn square_under_attack(&self, square: Square) -> bool {
        movegen::is_square_attacked(&self.board, square, self.turn.opposite())
    }
}
