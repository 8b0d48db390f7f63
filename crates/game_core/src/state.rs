//! The game state and its transitions.
//!
//! `GameState` is immutable by convention: every transition clones the
//! previous state and returns a fresh value. Collaborators may keep old
//! states (undo/redo, save files) and will never observe them changing.

use serde::{Deserialize, Serialize};

use crate::attacks::is_king_in_check;
use crate::board::Board;
use crate::movegen::{self, castle_rook_squares};
use crate::notation;
use crate::status::GameStatus;
use crate::types::{Piece, PieceType, PlayerColor, Square};

/// Castling availability for one side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCastling {
    pub king_side: bool,
    pub queen_side: bool,
}

impl SideCastling {
    pub const FULL: SideCastling = SideCastling {
        king_side: true,
        queen_side: true,
    };
    pub const NONE: SideCastling = SideCastling {
        king_side: false,
        queen_side: false,
    };
}

/// Per-color castling rights. Once revoked, a right is never restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideCastling,
    pub black: SideCastling,
}

impl CastlingRights {
    pub fn full() -> CastlingRights {
        CastlingRights {
            white: SideCastling::FULL,
            black: SideCastling::FULL,
        }
    }

    pub fn side(&self, color: PlayerColor) -> SideCastling {
        match color {
            PlayerColor::White => self.white,
            PlayerColor::Black => self.black,
        }
    }

    fn side_mut(&mut self, color: PlayerColor) -> &mut SideCastling {
        match color {
            PlayerColor::White => &mut self.white,
            PlayerColor::Black => &mut self.black,
        }
    }
}

/// Pieces captured so far, recorded under the capturing side. Append-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub by_white: Vec<Piece>,
    pub by_black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn by(&self, color: PlayerColor) -> &[Piece] {
        match color {
            PlayerColor::White => &self.by_white,
            PlayerColor::Black => &self.by_black,
        }
    }

    fn by_mut(&mut self, color: PlayerColor) -> &mut Vec<Piece> {
        match color {
            PlayerColor::White => &mut self.by_white,
            PlayerColor::Black => &mut self.by_black,
        }
    }
}

/// The unit of truth for one game.
///
/// Invariants: the side to move alternates with every applied move;
/// `position_history.len()` equals applied moves + 1 (the initial key is
/// seeded at creation); an applied move always clears a pending draw offer;
/// captured bags only grow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: PlayerColor,
    pub castling: CastlingRights,
    pub en_passant_target: Option<Square>,
    /// Algebraic move strings, one per applied move.
    pub move_history: Vec<String>,
    /// Position keys for repetition counting, seeded with the initial key.
    pub position_history: Vec<String>,
    pub status: GameStatus,
    pub captured: CapturedPieces,
    /// Pending draw offer: a move by either side clears it.
    pub draw_offer: Option<PlayerColor>,
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}

impl GameState {
    /// The standard starting position, White to move, full castling rights.
    pub fn new() -> GameState {
        let board = Board::initial();
        let castling = CastlingRights::full();
        let key = notation::position_key(&board, PlayerColor::White, castling, None);
        GameState {
            board,
            current_player: PlayerColor::White,
            castling,
            en_passant_target: None,
            move_history: Vec::new(),
            position_history: vec![key],
            status: GameStatus::Ongoing { check: false },
            captured: CapturedPieces::default(),
            draw_offer: None,
        }
    }

    /// Build a state from the first four FEN fields (placement, side,
    /// castling, en passant); halfmove and fullmove counters, when present,
    /// are ignored. Histories are fresh and seeded with this position's key,
    /// and the status is evaluated from scratch.
    ///
    /// Panics on malformed input; intended for fixtures and analysis setup,
    /// not untrusted data.
    pub fn from_fen(fen: &str) -> GameState {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().expect("FEN missing piece placement");
        let side = fields.next().expect("FEN missing side to move");
        let castling_field = fields.next().expect("FEN missing castling field");
        let en_passant_field = fields.next().expect("FEN missing en passant field");

        let board = Board::from_placement(placement);
        let current_player = match side {
            "w" => PlayerColor::White,
            "b" => PlayerColor::Black,
            _ => panic!("invalid side to move: {side}"),
        };
        let castling = CastlingRights {
            white: SideCastling {
                king_side: castling_field.contains('K'),
                queen_side: castling_field.contains('Q'),
            },
            black: SideCastling {
                king_side: castling_field.contains('k'),
                queen_side: castling_field.contains('q'),
            },
        };
        let en_passant_target = match en_passant_field {
            "-" => None,
            coord => Some(
                Square::from_algebraic(coord)
                    .unwrap_or_else(|| panic!("invalid en passant square: {coord}")),
            ),
        };

        let mut state = GameState {
            board,
            current_player,
            castling,
            en_passant_target,
            move_history: Vec::new(),
            position_history: vec![notation::position_key(
                &board,
                current_player,
                castling,
                en_passant_target,
            )],
            status: GameStatus::Ongoing { check: false },
            captured: CapturedPieces::default(),
            draw_offer: None,
        };
        state.status = evaluate_board_status(&state, 1);
        state
    }

    /// Key of the current position (see [`notation::position_key`]).
    pub fn position_key(&self) -> String {
        notation::position_key(
            &self.board,
            self.current_player,
            self.castling,
            self.en_passant_target,
        )
    }

    /// Display string for the current status. See [`GameStatus::describe`]
    /// for the substring contract.
    pub fn status_text(&self) -> String {
        self.status.describe(self.current_player)
    }

    /// Apply a move and return the resulting state.
    ///
    /// The caller is expected to pass a destination previously returned by
    /// [`GameState::valid_moves`]; legality is not re-checked here. An empty
    /// `from` square is a no-op returning the input unchanged. A structurally
    /// valid but illegal move still yields a well-formed state (misuse trips
    /// a debug assertion but degrades to permissive behavior in release).
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> GameState {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => return self.clone(),
        };
        debug_assert!(
            piece.color == self.current_player,
            "moving a {:?} piece on {:?}'s turn",
            piece.color,
            self.current_player
        );

        let mut next = self.clone();
        // A move implicitly rejects any pending draw offer.
        next.draw_offer = None;

        let is_en_passant =
            piece.kind == PieceType::Pawn && self.en_passant_target == Some(to);
        let captured = if is_en_passant {
            self.board.piece_at(Square::new(from.row, to.col))
        } else {
            self.board.piece_at(to)
        };
        if let Some(taken) = captured {
            next.captured.by_mut(self.current_player).push(taken);
            if is_en_passant {
                next.board.set(Square::new(from.row, to.col), None);
            }
            // A rook captured on its home square forfeits that right.
            if taken.kind == PieceType::Rook && !is_en_passant {
                let home_row = if taken.color == PlayerColor::White { 7 } else { 0 };
                if to.row == home_row {
                    if to.col == 0 {
                        next.castling.side_mut(taken.color).queen_side = false;
                    } else if to.col == 7 {
                        next.castling.side_mut(taken.color).king_side = false;
                    }
                }
            }
        }

        let promoted = match promotion {
            Some(kind) if piece.kind == PieceType::Pawn && (to.row == 0 || to.row == 7) => {
                Some(kind)
            }
            _ => None,
        };
        let placed = match promoted {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        };
        next.board.set(to, Some(placed));
        next.board.set(from, None);

        if piece.kind == PieceType::King && (from.col - to.col).abs() == 2 {
            let (rook_from, rook_to) = castle_rook_squares(from, to);
            let rook = next.board.piece_at(rook_from);
            next.board.set(rook_to, rook);
            next.board.set(rook_from, None);
        }

        next.en_passant_target =
            if piece.kind == PieceType::Pawn && (from.row - to.row).abs() == 2 {
                Some(Square::new((from.row + to.row) / 2, from.col))
            } else {
                None
            };

        if piece.kind == PieceType::King {
            *next.castling.side_mut(piece.color) = SideCastling::NONE;
        }
        if piece.kind == PieceType::Rook {
            let home_row = if piece.color == PlayerColor::White { 7 } else { 0 };
            if from.row == home_row {
                if from.col == 0 {
                    next.castling.side_mut(piece.color).queen_side = false;
                } else if from.col == 7 {
                    next.castling.side_mut(piece.color).king_side = false;
                }
            }
        }

        next.current_player = self.current_player.opponent();

        let key = next.position_key();
        next.position_history.push(key.clone());
        let occurrences = next
            .position_history
            .iter()
            .filter(|past| **past == key)
            .count();

        next.status = evaluate_board_status(&next, occurrences);

        let san = notation::move_san(
            from,
            to,
            piece,
            captured.is_some(),
            promoted,
            next.status.is_check(),
            matches!(next.status, GameStatus::Checkmate { .. }),
        );
        next.move_history.push(san);

        next
    }

    /// Record a draw offer by `by`. No-op when the game is over or the
    /// opponent's offer is already pending (that one must be accepted, not
    /// overwritten).
    pub fn offer_draw(&self, by: PlayerColor) -> GameState {
        let mut next = self.clone();
        if !self.status.is_game_over() && self.draw_offer != Some(by.opponent()) {
            next.draw_offer = Some(by);
        }
        next
    }

    /// Accept the opponent's pending draw offer, ending the game in a draw
    /// by agreement. No-op when there is nothing to accept.
    pub fn accept_draw(&self, by: PlayerColor) -> GameState {
        let mut next = self.clone();
        if !self.status.is_game_over() && self.draw_offer == Some(by.opponent()) {
            next.status = GameStatus::DrawByAgreement;
            next.draw_offer = None;
        }
        next
    }

    /// Resignation by `by`; the opponent wins. No-op on a finished game.
    pub fn resign(&self, by: PlayerColor) -> GameState {
        let mut next = self.clone();
        if !self.status.is_game_over() {
            next.status = GameStatus::Resignation {
                winner: by.opponent(),
            };
        }
        next
    }

    /// `color`'s clock ran out; the opponent wins on time. The collaborator
    /// owns the clocks and reports the flag fall. No-op on a finished game.
    pub fn flag_fall(&self, color: PlayerColor) -> GameState {
        let mut next = self.clone();
        if !self.status.is_game_over() {
            next.status = GameStatus::Timeout {
                winner: color.opponent(),
            };
        }
        next
    }
}

/// Terminal evaluation in priority order: insufficient material, threefold
/// repetition, then mate/stalemate for a side with no moves, otherwise
/// ongoing with a check annotation.
fn evaluate_board_status(state: &GameState, occurrences: usize) -> GameStatus {
    if insufficient_material(&state.board) {
        return GameStatus::DrawByInsufficientMaterial;
    }
    if occurrences >= 3 {
        return GameStatus::DrawByRepetition;
    }
    let check = is_king_in_check(&state.board, state.current_player);
    if !movegen::player_has_moves(state, state.current_player) {
        if check {
            GameStatus::Checkmate {
                winner: state.current_player.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    } else {
        GameStatus::Ongoing { check }
    }
}

/// Deliberately conservative material-draw rule: no pawns, rooks or queens
/// on the board, and either at most one minor piece in total, or exactly
/// one bishop per side with both bishops on same-colored squares. Two
/// knights, or bishop versus knight, are not a draw under this rule.
fn insufficient_material(board: &Board) -> bool {
    let mut white_minors: Vec<(Square, PieceType)> = Vec::new();
    let mut black_minors: Vec<(Square, PieceType)> = Vec::new();
    for (square, piece) in board.pieces() {
        match piece.kind {
            PieceType::Pawn | PieceType::Rook | PieceType::Queen => return false,
            PieceType::King => {}
            kind => {
                if piece.color == PlayerColor::White {
                    white_minors.push((square, kind));
                } else {
                    black_minors.push((square, kind));
                }
            }
        }
    }
    let total = white_minors.len() + black_minors.len();
    if total <= 1 {
        return true;
    }
    if total == 2 && white_minors.len() == 1 && black_minors.len() == 1 {
        if let ((white_sq, PieceType::Bishop), (black_sq, PieceType::Bishop)) =
            (white_minors[0], black_minors[0])
        {
            return (white_sq.row + white_sq.col) % 2 == (black_sq.row + black_sq.col) % 2;
        }
    }
    false
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
