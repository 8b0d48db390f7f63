//! Chess rules engine.
//!
//! Authoritative game state, legal move generation under the full rules
//! (castling, en passant, promotion), and terminal-condition detection
//! (checkmate, stalemate, draws). Engines and UIs build on the `GameState`
//! API; this crate knows nothing about searching or rendering.
//!
//! Every operation that changes a game produces a *new* `GameState` value.
//! Published states are never mutated, so collaborators may keep references
//! to earlier states for undo/redo and may share states across threads
//! without synchronization.

pub mod attacks;
pub mod board;
pub mod movegen;
pub mod notation;
pub mod save;
pub mod state;
pub mod status;
pub mod types;

pub use attacks::*;
pub use board::*;
pub use notation::*;
pub use save::*;
pub use state::*;
pub use status::*;
pub use types::*;
