//! Move generation: pseudo-legal moves per piece, then a legality filter
//! that simulates each candidate on a scratch copy of the board and drops
//! any move leaving the mover's own king in check.
//!
//! The board grid is `Copy`, so the scratch simulation is a stack copy with
//! no allocation. The filter makes no attempt at pin detection; correctness
//! comes from replaying the full move (castling rook shift and en passant
//! pawn removal included) before the check test.

use crate::attacks::{
    is_king_in_check, is_square_attacked, BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS,
};
use crate::board::Board;
use crate::state::{CastlingRights, GameState};
use crate::types::{Piece, PieceType, PlayerColor, Square};

impl GameState {
    /// Legal destinations for the piece at `origin`, in generator scan order.
    ///
    /// Empty when `origin` is empty. Deliberately does not gate on the side
    /// to move: querying the opponent's piece reports the moves it would
    /// have, and turn policing stays with the caller.
    pub fn valid_moves(&self, origin: Square) -> Vec<Square> {
        let piece = match self.board.piece_at(origin) {
            Some(piece) => piece,
            None => return Vec::new(),
        };
        let mut moves = pseudo_legal_moves(
            piece,
            origin,
            &self.board,
            self.en_passant_target,
            self.castling,
        );
        moves.retain(|&to| !leaves_king_in_check(&self.board, piece, origin, to, self.en_passant_target));
        moves
    }
}

/// Does `player` have at least one legal move anywhere?
pub(crate) fn player_has_moves(state: &GameState, player: PlayerColor) -> bool {
    state
        .board
        .pieces()
        .any(|(square, piece)| piece.color == player && !state.valid_moves(square).is_empty())
}

/// Play the move on a private copy of the grid and test the mover's king.
fn leaves_king_in_check(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> bool {
    let mut scratch = *board;
    if piece.kind == PieceType::King && (from.col - to.col).abs() == 2 {
        let (rook_from, rook_to) = castle_rook_squares(from, to);
        let rook = scratch.piece_at(rook_from);
        scratch.set(rook_to, rook);
        scratch.set(rook_from, None);
    }
    scratch.set(to, Some(piece));
    scratch.set(from, None);
    if piece.kind == PieceType::Pawn && en_passant_target == Some(to) {
        scratch.set(Square::new(from.row, to.col), None);
    }
    is_king_in_check(&scratch, piece.color)
}

/// Origin and destination of the rook for a two-file king move.
pub(crate) fn castle_rook_squares(from: Square, to: Square) -> (Square, Square) {
    if to.col > from.col {
        (Square::new(from.row, 7), Square::new(from.row, from.col + 1))
    } else {
        (Square::new(from.row, 0), Square::new(from.row, from.col - 1))
    }
}

fn pseudo_legal_moves(
    piece: Piece,
    origin: Square,
    board: &Board,
    en_passant_target: Option<Square>,
    castling: CastlingRights,
) -> Vec<Square> {
    let mut moves = Vec::new();
    match piece.kind {
        PieceType::Pawn => pawn_moves(piece.color, origin, board, en_passant_target, &mut moves),
        PieceType::Knight => leaper_moves(piece.color, origin, board, &KNIGHT_OFFSETS, &mut moves),
        PieceType::Bishop => slider_moves(piece.color, origin, board, &BISHOP_DIRS, &mut moves),
        PieceType::Rook => slider_moves(piece.color, origin, board, &ROOK_DIRS, &mut moves),
        PieceType::Queen => {
            slider_moves(piece.color, origin, board, &BISHOP_DIRS, &mut moves);
            slider_moves(piece.color, origin, board, &ROOK_DIRS, &mut moves);
        }
        PieceType::King => {
            leaper_moves(piece.color, origin, board, &KING_OFFSETS, &mut moves);
            castle_moves(piece.color, origin, board, castling, &mut moves);
        }
    }
    moves
}

fn pawn_moves(
    color: PlayerColor,
    origin: Square,
    board: &Board,
    en_passant_target: Option<Square>,
    moves: &mut Vec<Square>,
) {
    let dir = if color == PlayerColor::White { -1 } else { 1 };
    let start_row = if color == PlayerColor::White { 6 } else { 1 };

    if let Some(one) = origin.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            moves.push(one);
            if origin.row == start_row {
                let two = Square::new(origin.row + 2 * dir, origin.col);
                if board.piece_at(two).is_none() {
                    moves.push(two);
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = origin.offset(dir, d_col) {
            match board.piece_at(target) {
                Some(victim) if victim.color != color => moves.push(target),
                None if en_passant_target == Some(target) => moves.push(target),
                _ => {}
            }
        }
    }
}

fn leaper_moves(
    color: PlayerColor,
    origin: Square,
    board: &Board,
    offsets: &[(i8, i8); 8],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = origin.offset(d_row, d_col) {
            match board.piece_at(target) {
                Some(occupant) if occupant.color == color => {}
                _ => moves.push(target),
            }
        }
    }
}

fn slider_moves(
    color: PlayerColor,
    origin: Square,
    board: &Board,
    dirs: &[(i8, i8); 4],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in dirs {
        let mut current = origin;
        while let Some(target) = current.offset(d_row, d_col) {
            current = target;
            match board.piece_at(target) {
                None => moves.push(target),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
}

/// Castling candidates: right still held, squares between king and rook
/// empty, king not currently in check, and neither transit square attacked.
fn castle_moves(
    color: PlayerColor,
    origin: Square,
    board: &Board,
    castling: CastlingRights,
    moves: &mut Vec<Square>,
) {
    if is_king_in_check(board, color) {
        return;
    }
    let rights = castling.side(color);
    let opponent = color.opponent();

    if rights.king_side {
        if let (Some(step), Some(dest)) = (origin.offset(0, 1), origin.offset(0, 2)) {
            if board.piece_at(step).is_none()
                && board.piece_at(dest).is_none()
                && !is_square_attacked(board, step, opponent)
                && !is_square_attacked(board, dest, opponent)
            {
                moves.push(dest);
            }
        }
    }
    if rights.queen_side {
        if let (Some(step), Some(dest), Some(rook_path)) = (
            origin.offset(0, -1),
            origin.offset(0, -2),
            origin.offset(0, -3),
        ) {
            if board.piece_at(step).is_none()
                && board.piece_at(dest).is_none()
                && board.piece_at(rook_path).is_none()
                && !is_square_attacked(board, step, opponent)
                && !is_square_attacked(board, dest, opponent)
            {
                moves.push(dest);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
