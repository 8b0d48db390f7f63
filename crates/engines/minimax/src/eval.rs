//! Static evaluation: material plus piece-square bonuses, from White's
//! perspective. Positive favors White, negative favors Black.

use game_core::{Board, PlayerColor};

use crate::pst::positional_value;

/// Score `board` in centipawn-scale units. Material weights are the
/// classic 1/3/3/5/9 (times 100); the king contributes only through its
/// piece-square table.
pub fn evaluate(board: &Board) -> i32 {
    let mut total = 0;
    for (square, piece) in board.pieces() {
        let value = piece.kind.material_value() * 100 + positional_value(piece, square);
        total += match piece.color {
            PlayerColor::White => value,
            PlayerColor::Black => -value,
        };
    }
    total
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
