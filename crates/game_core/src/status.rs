//! Game status as a tagged enum, formatted to display strings only at the
//! boundary.
//!
//! UI collaborators detect game over by substring: any status text
//! containing `"wins"` or `"Draw"` marks the game as finished. That
//! convention is load-bearing, so the literals produced by [`GameStatus::describe`]
//! must not change. Structured callers should use [`GameStatus::is_game_over`]
//! instead.

use serde::{Deserialize, Serialize};

use crate::types::PlayerColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing { check: bool },
    Checkmate { winner: PlayerColor },
    Stalemate,
    DrawByRepetition,
    DrawByInsufficientMaterial,
    DrawByAgreement,
    Resignation { winner: PlayerColor },
    Timeout { winner: PlayerColor },
}

impl GameStatus {
    pub fn is_game_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }

    pub fn is_check(self) -> bool {
        matches!(self, GameStatus::Ongoing { check: true })
    }

    /// The winning side, for statuses that have one. Draws and ongoing games
    /// return `None`.
    pub fn winner(self) -> Option<PlayerColor> {
        match self {
            GameStatus::Checkmate { winner }
            | GameStatus::Resignation { winner }
            | GameStatus::Timeout { winner } => Some(winner),
            _ => None,
        }
    }

    /// Display string for UI collaborators. `side_to_move` is only used for
    /// ongoing games ("White's Turn", optionally annotated with check).
    pub fn describe(self, side_to_move: PlayerColor) -> String {
        match self {
            GameStatus::Ongoing { check } => format!(
                "{}'s Turn{}",
                side_to_move.name(),
                if check { " (Check!)" } else { "" }
            ),
            GameStatus::Checkmate { winner } => format!("{} wins by Checkmate!", winner.name()),
            GameStatus::Stalemate => "Draw by Stalemate".to_string(),
            GameStatus::DrawByRepetition => "Draw by Repetition".to_string(),
            GameStatus::DrawByInsufficientMaterial => "Draw by Insufficient Material".to_string(),
            GameStatus::DrawByAgreement => "Draw by agreement.".to_string(),
            GameStatus::Resignation { winner } => format!("{} wins by resignation.", winner.name()),
            GameStatus::Timeout { winner } => format!("{} wins on time.", winner.name()),
        }
    }
}
