use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    pub fn opponent(self) -> PlayerColor {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::White => "White",
            PlayerColor::Black => "Black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Relative material value in pawns: queen 9, rook 5, bishop 3,
    /// knight 3, pawn 1, king 0.
    pub fn material_value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    pub fn fen_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: PlayerColor,
}

impl Piece {
    pub fn new(kind: PieceType, color: PlayerColor) -> Piece {
        Piece { kind, color }
    }
}

/// A board coordinate. Row 0 is rank 8 (black's back rank), row 7 is rank 1;
/// column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Square {
        debug_assert!(
            (0..8).contains(&row) && (0..8).contains(&col),
            "square ({row}, {col}) is off the board"
        );
        Square { row, col }
    }

    /// Checked construction for candidate squares reached by an offset.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row + d_row;
        let col = self.col + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Coordinate in algebraic form, e.g. "e4".
    pub fn algebraic(self) -> String {
        let file = (b'a' + self.col as u8) as char;
        let rank = 8 - self.row;
        format!("{file}{rank}")
    }

    pub fn from_algebraic(coord: &str) -> Option<Square> {
        let bytes = coord.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (f, r) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        let col = (f - b'a') as i8;
        let row = 8 - (r - b'0') as i8;
        Some(Square { row, col })
    }
}
