//! Move generation.
//!
//! Pseudo-legal moves are generated per piece by walking fixed offset and
//! ray tables over the board. Legality is a pure filter on top: each
//! candidate is played on a copy of the board and rejected if the mover's
//! king is attacked afterwards.

pub mod perft;

use chess_core::{Board, Cell, Color, Move, Piece, Square};

/// Rook rays: up, left, down, right.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Bishop rays.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generates every pseudo-legal move for `side`.
///
/// Squares are visited row by row from a8 to h1. Moves may leave the
/// mover's own king in check.
pub fn pseudo_legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for from in Square::all() {
        if let Cell::Occupied(color, piece) = board.get(from) {
            if color == side {
                generate_piece_moves(board, from, color, piece, &mut moves);
            }
        }
    }
    moves
}

/// Appends the pseudo-legal moves of the `piece` standing on `from`.
pub fn generate_piece_moves(
    board: &Board,
    from: Square,
    color: Color,
    piece: Piece,
    moves: &mut Vec<Move>,
) {
    match piece {
        Piece::Pawn => generate_pawn_moves(board, from, color, moves),
        Piece::Knight => generate_step_moves(board, from, color, &KNIGHT_OFFSETS, moves),
        Piece::Bishop => generate_slider_moves(board, from, color, &BISHOP_DIRECTIONS, moves),
        Piece::Rook => generate_slider_moves(board, from, color, &ROOK_DIRECTIONS, moves),
        Piece::Queen => {
            generate_slider_moves(board, from, color, &ROOK_DIRECTIONS, moves);
            generate_slider_moves(board, from, color, &BISHOP_DIRECTIONS, moves);
        }
        Piece::King => generate_step_moves(board, from, color, &KING_OFFSETS, moves),
    }
}

/// Generates legal moves for `side`: pseudo-legal moves that do not leave
/// `side`'s king attacked.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = pseudo_legal_moves(board, side);
    moves.retain(|m| is_legal(board, side, m));
    moves
}

/// Returns true if playing `m` does not leave `side`'s king attacked.
///
/// The move is played on a copy, `board` is never touched.
pub fn is_legal(board: &Board, side: Color, m: &Move) -> bool {
    let next = board.with_move(m);
    !is_in_check(&next, side)
}

/// Returns true if any pseudo-legal move of `attacker` lands on `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    pseudo_legal_moves(board, attacker)
        .iter()
        .any(|m| m.to() == square)
}

/// Returns true if `color`'s king is attacked.
///
/// A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
}

/// Pushes a move unless the destination holds a friendly piece.
#[inline]
fn push_unless_friendly(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    moves: &mut Vec<Move>,
) {
    if !board.get(to).is_color(color) {
        moves.push(Move::new(from, to, board));
    }
}

fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    // Pushes
    if let Some(one) = from.offset(dir, 0) {
        if board.get(one).is_empty() {
            moves.push(Move::new(from, one, board));
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.get(two).is_empty() {
                        moves.push(Move::new(from, two, board));
                    }
                }
            }
        }
    }

    // Captures (left, then right)
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.get(to).is_color(color.opposite()) {
                moves.push(Move::new(from, to, board));
            }
        }
    }
}

/// Single-step pieces (knight, king).
fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            push_unless_friendly(board, from, to, color, moves);
        }
    }
}

/// Sliding pieces: each ray runs until the board edge or the first occupied
/// square, which is included only if it holds an enemy piece.
fn generate_slider_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match board.get(to) {
                Cell::Empty => moves.push(Move::new(from, to, board)),
                Cell::Occupied(c, _) => {
                    if c != color {
                        moves.push(Move::new(from, to, board));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
