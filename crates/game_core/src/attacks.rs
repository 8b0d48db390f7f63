//! Attack and check detection over the mailbox board.
//!
//! `is_square_attacked` checks each attacking geometry independently:
//! pawn captures, knight jumps, king adjacency, then rook/bishop/queen
//! rays stopping at the first occupied square. Bounded by the 64-square
//! board, so every call is O(64) worst case.

use crate::board::Board;
use crate::types::{Piece, PieceType, PlayerColor, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Is `square` attacked by any piece of color `by`?
pub fn is_square_attacked(board: &Board, square: Square, by: PlayerColor) -> bool {
    // White pawns capture toward lower rows, so a white pawn attacking
    // `square` sits one row below it (higher row index); black the reverse.
    let pawn_row = if by == PlayerColor::White { 1 } else { -1 };
    for d_col in [-1, 1] {
        if let Some(sq) = square.offset(pawn_row, d_col) {
            if board.piece_at(sq) == Some(Piece::new(PieceType::Pawn, by)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(sq) = square.offset(d_row, d_col) {
            if board.piece_at(sq) == Some(Piece::new(PieceType::Knight, by)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KING_OFFSETS {
        if let Some(sq) = square.offset(d_row, d_col) {
            if board.piece_at(sq) == Some(Piece::new(PieceType::King, by)) {
                return true;
            }
        }
    }

    ray_attacked(board, square, by, &ROOK_DIRS, PieceType::Rook)
        || ray_attacked(board, square, by, &BISHOP_DIRS, PieceType::Bishop)
}

/// Walk each ray from `square` until the first occupied square; an attack
/// exists when that square holds the matching slider or a queen of `by`.
fn ray_attacked(
    board: &Board,
    square: Square,
    by: PlayerColor,
    dirs: &[(i8, i8); 4],
    slider: PieceType,
) -> bool {
    for &(d_row, d_col) in dirs {
        let mut current = square;
        while let Some(sq) = current.offset(d_row, d_col) {
            current = sq;
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceType::Queen) {
                    return true;
                }
                break;
            }
        }
    }
    false
}

/// Is `color`'s king attacked by the opponent?
///
/// The engine never removes kings, so a missing king is an internal
/// invariant violation; it is treated as not-in-check after a debug assert.
pub fn is_king_in_check(board: &Board, color: PlayerColor) -> bool {
    match board.find_king(color) {
        Some(square) => is_square_attacked(board, square, color.opponent()),
        None => {
            debug_assert!(false, "no {color:?} king on the board");
            false
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
