//! Turn engine: game state, turn events, and the turn state machine.
//!
//! The engine is the single source of truth for where the token is.
//! Renderers read the event stream and never write back.

pub mod event;
pub mod state;
pub mod turn;

pub use event::{EventKind, GameEvent};
pub use state::{GameState, Phase};
pub use turn::TurnEngine;
