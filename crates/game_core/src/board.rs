use serde::{Deserialize, Serialize};

use crate::types::{Piece, PieceType, PlayerColor, Square};

/// The 8x8 grid. `Copy` so legality checks can simulate a move on a private
/// copy of the grid without touching the published state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: black's back rank on row 0, white's on
    /// row 7.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for col in 0..8 {
            let kind = BACK_RANK[col as usize];
            board.set(Square::new(0, col), Some(Piece::new(kind, PlayerColor::Black)));
            board.set(
                Square::new(1, col),
                Some(Piece::new(PieceType::Pawn, PlayerColor::Black)),
            );
            board.set(
                Square::new(6, col),
                Some(Piece::new(PieceType::Pawn, PlayerColor::White)),
            );
            board.set(Square::new(7, col), Some(Piece::new(kind, PlayerColor::White)));
        }
        board
    }

    /// Parse the piece-placement field of a FEN string ("rnbqkbnr/8/...").
    /// Panics on malformed input; intended for fixtures and setup, not for
    /// untrusted data.
    pub fn from_placement(placement: &str) -> Board {
        let ranks: Vec<&str> = placement.split('/').collect();
        assert!(ranks.len() == 8, "placement must list 8 ranks");

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    col += skip as i8;
                } else {
                    let kind = PieceType::from_fen_char(ch)
                        .unwrap_or_else(|| panic!("invalid piece char in placement: {ch}"));
                    let color = if ch.is_uppercase() {
                        PlayerColor::White
                    } else {
                        PlayerColor::Black
                    };
                    assert!(col < 8, "too many files in placement rank");
                    board.set(Square::new(row as i8, col), Some(Piece::new(kind, color)));
                    col += 1;
                }
            }
            assert!(col == 8, "placement rank does not cover 8 files");
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    pub fn find_king(&self, color: PlayerColor) -> Option<Square> {
        for (square, piece) in self.pieces() {
            if piece.kind == PieceType::King && piece.color == color {
                return Some(square);
            }
        }
        None
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                let square = Square::new(row, col);
                self.piece_at(square).map(|piece| (square, piece))
            })
        })
    }
}
