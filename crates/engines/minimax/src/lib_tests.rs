use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sq(coord: &str) -> Square {
    Square::from_algebraic(coord).unwrap()
}

#[test]
fn returns_a_legal_move_from_the_start() {
    let state = GameState::new();
    let mv = find_best_move(&state, 1).expect("the opening position has moves");
    let piece = state.board.piece_at(mv.from).expect("move starts on a piece");
    assert_eq!(piece.color, PlayerColor::White);
    assert!(state.valid_moves(mv.from).contains(&mv.to));
}

#[test]
fn returns_none_when_checkmated() {
    let state =
        GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3");
    assert_eq!(find_best_move(&state, 2), None);
}

#[test]
fn returns_none_when_stalemated() {
    let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(find_best_move(&state, 2), None);
}

#[test]
fn same_seed_selects_the_same_move() {
    let state = GameState::new();
    let first = find_best_move_with(&state, 2, &mut StdRng::seed_from_u64(7));
    let second = find_best_move_with(&state, 2, &mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);
}

#[test]
fn depth_one_picks_an_evaluation_optimal_move_for_white() {
    let state = GameState::new();
    let best = find_best_move_with(&state, 1, &mut StdRng::seed_from_u64(42)).unwrap();

    let optimum = search::side_moves(&state, PlayerColor::White)
        .into_iter()
        .map(|mv| evaluate(&state.apply_move(mv.from, mv.to, None).board))
        .max()
        .unwrap();
    let chosen = evaluate(&state.apply_move(best.from, best.to, None).board);
    assert_eq!(chosen, optimum);
}

#[test]
fn depth_one_picks_an_evaluation_optimal_move_for_black() {
    let state = GameState::new().apply_move(sq("e2"), sq("e4"), None);
    assert_eq!(state.current_player, PlayerColor::Black);
    let best = find_best_move_with(&state, 1, &mut StdRng::seed_from_u64(42)).unwrap();

    let optimum = search::side_moves(&state, PlayerColor::Black)
        .into_iter()
        .map(|mv| evaluate(&state.apply_move(mv.from, mv.to, None).board))
        .min()
        .unwrap();
    let chosen = evaluate(&state.apply_move(best.from, best.to, None).board);
    assert_eq!(chosen, optimum);
}
