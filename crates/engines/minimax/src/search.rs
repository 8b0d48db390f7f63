//! Fail-hard minimax with alpha-beta pruning.

use game_core::{GameState, PlayerColor};

use crate::eval::evaluate;
use crate::Move;

/// All legal moves for `player`, in board scan order.
pub(crate) fn side_moves(state: &GameState, player: PlayerColor) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in state.board.pieces() {
        if piece.color != player {
            continue;
        }
        for to in state.valid_moves(from) {
            moves.push(Move { from, to });
        }
    }
    moves
}

/// Score `state` by exploring `depth` further plies. `maximizing` names the
/// side to move (White maximizes). Terminal positions and depth zero return
/// the static evaluation. A branch is pruned as soon as `beta <= alpha`.
pub(crate) fn minimax(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if depth == 0 || state.status.is_game_over() {
        return evaluate(&state.board);
    }

    let player = if maximizing {
        PlayerColor::White
    } else {
        PlayerColor::Black
    };
    let moves = side_moves(state, player);

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let next = state.apply_move(mv.from, mv.to, None);
            let score = minimax(&next, depth - 1, alpha, beta, false);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let next = state.apply_move(mv.from, mv.to, None);
            let score = minimax(&next, depth - 1, alpha, beta, true);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
