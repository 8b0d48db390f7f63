use super::*;
use game_core::GameState;

#[test]
fn the_starting_position_is_balanced() {
    let state = GameState::new();
    assert_eq!(evaluate(&state.board), 0);
}

#[test]
fn mirrored_positions_cancel_out() {
    let state = GameState::from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&state.board), 0);
}

#[test]
fn an_extra_queen_dominates_the_score() {
    // Queen on d1: 900 material minus 5 from its home-square table.
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    assert_eq!(evaluate(&state.board), 895);
}

#[test]
fn advancing_a_center_pawn_improves_the_score() {
    let home = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    let advanced = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    // e2 carries a -20 table penalty, e4 a +20 bonus.
    assert_eq!(evaluate(&advanced.board) - evaluate(&home.board), 40);
}

#[test]
fn black_pieces_use_the_mirrored_table_rows() {
    // A black pawn on e5 mirrors a white pawn on e4.
    let white = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    let black = GameState::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&white.board), -evaluate(&black.board));
}
