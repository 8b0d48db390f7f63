//! Position keys for repetition detection and algebraic move notation.

use crate::board::Board;
use crate::state::CastlingRights;
use crate::types::{Piece, PieceType, PlayerColor, Square};

/// FEN piece-placement field for the grid, rank 8 first.
pub fn board_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for row in 0..8i8 {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for col in 0..8i8 {
            match board.piece_at(Square::new(row, col)) {
                None => empty += 1,
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    let ch = piece.kind.fen_char();
                    out.push(if piece.color == PlayerColor::White {
                        ch.to_ascii_uppercase()
                    } else {
                        ch
                    });
                }
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }
    out
}

fn castling_field(castling: CastlingRights) -> String {
    let mut out = String::with_capacity(4);
    if castling.white.king_side {
        out.push('K');
    }
    if castling.white.queen_side {
        out.push('Q');
    }
    if castling.black.king_side {
        out.push('k');
    }
    if castling.black.queen_side {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

/// Canonical key for repetition counting.
///
/// A pure function of exactly these four inputs: board layout, side to
/// move, castling rights, en passant target. Two states with the same key
/// are the same position for the threefold rule, regardless of how they
/// were reached. Move counters must never leak into the key.
pub fn position_key(
    board: &Board,
    side_to_move: PlayerColor,
    castling: CastlingRights,
    en_passant_target: Option<Square>,
) -> String {
    let side = match side_to_move {
        PlayerColor::White => 'w',
        PlayerColor::Black => 'b',
    };
    let en_passant = en_passant_target.map_or_else(|| "-".to_string(), Square::algebraic);
    format!(
        "{} {} {} {}",
        board_placement(board),
        side,
        castling_field(castling),
        en_passant
    )
}

fn piece_letter(kind: PieceType) -> &'static str {
    match kind {
        PieceType::Pawn => "",
        PieceType::Knight => "N",
        PieceType::Bishop => "B",
        PieceType::Rook => "R",
        PieceType::Queen => "Q",
        PieceType::King => "K",
    }
}

/// Algebraic rendering of a single move: piece letter (none for pawns),
/// capture marker, destination, promotion and check/mate suffixes.
/// Castling renders as the fixed `O-O` / `O-O-O` tokens with no suffix.
pub fn move_san(
    from: Square,
    to: Square,
    piece: Piece,
    is_capture: bool,
    promotion: Option<PieceType>,
    is_check: bool,
    is_checkmate: bool,
) -> String {
    if piece.kind == PieceType::King && (from.col - to.col).abs() == 2 {
        return if to.col > from.col { "O-O" } else { "O-O-O" }.to_string();
    }
    let mut san = String::from(piece_letter(piece.kind));
    if piece.kind == PieceType::Pawn && is_capture {
        san.push((b'a' + from.col as u8) as char);
    }
    if is_capture {
        san.push('x');
    }
    san.push_str(&to.algebraic());
    if let Some(kind) = promotion {
        san.push('=');
        san.push_str(piece_letter(kind));
    }
    if is_checkmate {
        san.push('#');
    } else if is_check {
        san.push('+');
    }
    san
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
