//! Serde types for the save format.
//!
//! Persistence itself lives with the UI collaborator; this module only
//! shapes the data. A saved game is the full ordered sequence of
//! state-plus-clocks snapshots, the index of the snapshot currently shown,
//! and the settings the game was started with. Loading reconstructs the
//! identical `GameState` sequence with no recomputation.

use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::types::PlayerColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeControl {
    pub initial_ms: u64,
    pub increment_ms: u64,
}

/// Remaining clock time per player at one snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerClocks {
    pub white_ms: u64,
    pub black_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsBot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub mode: GameMode,
    /// The human's color in bot games.
    pub player_color: PlayerColor,
    /// Search depth in plies for the bot opponent.
    pub bot_depth: u8,
    pub time_control: TimeControl,
}

/// One snapshot in a game's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameTurn {
    pub state: GameState,
    pub clocks: PlayerClocks,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub turns: Vec<GameTurn>,
    /// Index into `turns` of the snapshot currently displayed.
    pub current_index: usize,
    pub settings: GameSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn sq(coord: &str) -> Square {
        Square::from_algebraic(coord).unwrap()
    }

    fn sample_settings() -> GameSettings {
        GameSettings {
            mode: GameMode::PlayerVsBot,
            player_color: PlayerColor::White,
            bot_depth: 2,
            time_control: TimeControl {
                initial_ms: 300_000,
                increment_ms: 2_000,
            },
        }
    }

    #[test]
    fn saved_game_round_trips_through_json() {
        let start = GameState::new();
        let after_e4 = start.apply_move(sq("e2"), sq("e4"), None);
        let saved = SavedGame {
            turns: vec![
                GameTurn {
                    state: start,
                    clocks: PlayerClocks {
                        white_ms: 300_000,
                        black_ms: 300_000,
                    },
                },
                GameTurn {
                    state: after_e4,
                    clocks: PlayerClocks {
                        white_ms: 295_400,
                        black_ms: 300_000,
                    },
                },
            ],
            current_index: 1,
            settings: sample_settings(),
        };

        let json = serde_json::to_string(&saved).unwrap();
        let restored: SavedGame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, saved);
    }

    #[test]
    fn restored_states_need_no_recomputation() {
        let mut state = GameState::new();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            state = state.apply_move(sq(from), sq(to), None);
        }
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, state);
        assert_eq!(restored.move_history, vec!["e4", "e5", "Nf3"]);
        assert_eq!(restored.position_history.len(), 4);
        assert_eq!(restored.status_text(), "Black's Turn");
    }
}
