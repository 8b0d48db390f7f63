//! En passant: target creation, immediate capture, and expiry.

use game_core::{GameState, Piece, PieceType, PlayerColor, Square};

fn sq(coord: &str) -> Square {
    Square::from_algebraic(coord).unwrap()
}

fn play(state: &GameState, from: &str, to: &str) -> GameState {
    state.apply_move(sq(from), sq(to), None)
}

#[test]
fn double_step_sets_exactly_one_target() {
    let state = play(&GameState::new(), "e2", "e4");
    assert_eq!(state.en_passant_target, Some(sq("e3")));

    let single = play(&GameState::new(), "e2", "e3");
    assert_eq!(single.en_passant_target, None);
}

#[test]
fn target_is_cleared_by_the_next_move() {
    let state = play(&GameState::new(), "e2", "e4");
    let next = play(&state, "g8", "f6");
    assert_eq!(next.en_passant_target, None);
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    // 1.e4 a6 2.e5 d5 3.exd6 e.p.
    let mut state = GameState::new();
    for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
        state = play(&state, from, to);
    }
    assert_eq!(state.en_passant_target, Some(sq("d6")));
    assert!(state.valid_moves(sq("e5")).contains(&sq("d6")));

    let captured = play(&state, "e5", "d6");
    assert_eq!(
        captured.board.piece_at(sq("d6")),
        Some(Piece::new(PieceType::Pawn, PlayerColor::White))
    );
    assert_eq!(captured.board.piece_at(sq("d5")), None, "passed pawn is gone");
    assert_eq!(
        captured.captured.by(PlayerColor::White),
        &[Piece::new(PieceType::Pawn, PlayerColor::Black)]
    );
    assert_eq!(captured.move_history.last().unwrap(), "exd6");
}

#[test]
fn the_chance_expires_after_one_move() {
    // Same position, but white waits a move before trying to capture.
    let mut state = GameState::new();
    for (from, to) in [
        ("e2", "e4"),
        ("a7", "a6"),
        ("e4", "e5"),
        ("d7", "d5"),
        ("h2", "h3"),
        ("h7", "h6"),
    ] {
        state = play(&state, from, to);
    }
    assert_eq!(state.en_passant_target, None);
    assert!(!state.valid_moves(sq("e5")).contains(&sq("d6")));
}
