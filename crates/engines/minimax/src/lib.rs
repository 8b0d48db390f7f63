//! Minimax chess engine.
//!
//! A fixed-depth, fail-hard alpha-beta search over the `game_core` rules
//! engine, with material-plus-piece-square static evaluation. The root
//! move list is shuffled before searching so the bot varies its play among
//! equally scored moves; everything below the root is deterministic.

use game_core::{GameState, PlayerColor, Square};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

mod eval;
mod pst;
mod search;

pub use eval::evaluate;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// One move of a piece: origin and destination square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

/// Pick the best move for the side to move, searching `depth` plies.
///
/// Returns `None` when the side to move has no legal moves (checkmate or
/// stalemate). The candidate order is randomized with the thread RNG; use
/// [`find_best_move_with`] for reproducible selection in tests.
pub fn find_best_move(state: &GameState, depth: u8) -> Option<Move> {
    find_best_move_with(state, depth, &mut thread_rng())
}

/// [`find_best_move`] with a caller-supplied RNG for the root shuffle.
pub fn find_best_move_with<R: Rng>(state: &GameState, depth: u8, rng: &mut R) -> Option<Move> {
    let bot_color = state.current_player;
    let mut moves = search::side_moves(state, bot_color);
    if moves.is_empty() {
        return None;
    }
    // Uniform shuffle for variety among equally scored moves; ties are
    // then resolved by keeping the first strict improvement.
    moves.shuffle(rng);

    let mut best_move = None;
    let mut best_value = if bot_color == PlayerColor::White {
        i32::MIN
    } else {
        i32::MAX
    };
    for mv in moves {
        let next = state.apply_move(mv.from, mv.to, None);
        let value = search::minimax(
            &next,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            bot_color == PlayerColor::Black,
        );
        if bot_color == PlayerColor::White {
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        } else if value < best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }
    best_move
}
