//! Draw detection: stalemate, threefold repetition, insufficient material.

use game_core::{GameState, GameStatus, PlayerColor, Square};

fn sq(coord: &str) -> Square {
    Square::from_algebraic(coord).unwrap()
}

fn play(state: &GameState, from: &str, to: &str) -> GameState {
    state.apply_move(sq(from), sq(to), None)
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn stalemate_reached_by_a_move() {
    // Rh7-b7 leaves the cornered black king with no moves and no check.
    let state = GameState::from_fen("k7/7R/2K5/8/8/8/8/8 w - - 0 1");
    let stalemated = play(&state, "h7", "b7");
    assert_eq!(stalemated.status, GameStatus::Stalemate);
    assert_eq!(stalemated.status_text(), "Draw by Stalemate");
}

#[test]
fn stalemate_position_from_fen() {
    let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(state.status, GameStatus::Stalemate);
    assert!(state.status_text().contains("Draw"));
}

// =============================================================================
// Threefold repetition
// =============================================================================

#[test]
fn repetition_draws_exactly_on_the_third_occurrence() {
    let shuffle = [
        ("g1", "f3"),
        ("g8", "f6"),
        ("f3", "g1"),
        ("f6", "g8"), // initial position, second occurrence
        ("g1", "f3"),
        ("g8", "f6"),
        ("f3", "g1"),
    ];
    let mut state = GameState::new();
    for (from, to) in shuffle {
        state = play(&state, from, to);
        assert!(
            !state.status.is_game_over(),
            "no draw before the third occurrence (after {from}-{to})"
        );
    }
    // Ng8 recreates the initial position for the third time.
    let drawn = play(&state, "f6", "g8");
    assert_eq!(drawn.status, GameStatus::DrawByRepetition);
    assert_eq!(drawn.status_text(), "Draw by Repetition");
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn bare_kings_draw() {
    let state = GameState::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(state.status, GameStatus::DrawByInsufficientMaterial);
    assert_eq!(state.status_text(), "Draw by Insufficient Material");
}

#[test]
fn lone_minor_piece_draws() {
    let bishop = GameState::from_fen("k7/8/8/8/8/8/8/KB6 w - - 0 1");
    assert_eq!(bishop.status, GameStatus::DrawByInsufficientMaterial);

    let knight = GameState::from_fen("k7/8/8/8/8/8/8/KN6 b - - 0 1");
    assert_eq!(knight.status, GameStatus::DrawByInsufficientMaterial);
}

#[test]
fn same_colored_bishops_draw_opposite_colored_do_not() {
    // Both bishops on dark squares (c8 and b1).
    let same = GameState::from_fen("k1b5/8/8/8/8/8/8/KB6 w - - 0 1");
    assert_eq!(same.status, GameStatus::DrawByInsufficientMaterial);

    // Bishops on opposite square colors (b8 and b1).
    let opposite = GameState::from_fen("kb6/8/8/8/8/8/8/KB6 w - - 0 1");
    assert!(!opposite.status.is_game_over());
}

#[test]
fn two_knights_are_not_a_material_draw() {
    let state = GameState::from_fen("k7/8/8/8/8/8/8/KNN5 w - - 0 1");
    assert!(!state.status.is_game_over());
}

#[test]
fn material_draw_is_detected_when_the_last_piece_falls() {
    // Kxa2 removes the final rook, leaving bare kings.
    let state = GameState::from_fen("k7/8/8/8/8/8/r7/K7 w - - 0 1");
    let drawn = play(&state, "a1", "a2");
    assert_eq!(drawn.status, GameStatus::DrawByInsufficientMaterial);
}
