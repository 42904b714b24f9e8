//! Presentation: the renderer capability and turn pacing.
//!
//! The engine decides; renderers only show. A `BoardRenderer` receives each
//! event after the engine has applied it, and `present_turn` spaces the
//! events out in time so a visual transition can finish before the next
//! one starts.
//!
//! ## Example Usage
//!
//! ```
//! use ladderboard::board::Board;
//! use ladderboard::core::ForcedRolls;
//! use ladderboard::engine::TurnEngine;
//! use ladderboard::render::{present_turn, Pacing, StatusLog};
//!
//! let mut engine = TurnEngine::new(Board::classic().unwrap(), ForcedRolls::new([3]));
//! let mut log = StatusLog::new();
//!
//! present_turn(&mut engine, &mut log, &Pacing::instant()).unwrap();
//! assert!(log.lines().iter().any(|line| line == "Climbed up to 14"));
//! assert_eq!(log.last(), Some("Your turn to roll."));
//! assert_eq!(log.token().number(), 14);
//! ```

mod pacing;
mod status;

pub use pacing::{present_turn, Pacing};
pub use status::{describe, StatusLog};

use crate::board::Board;
use crate::engine::GameEvent;

/// Anything that can show the board.
///
/// Called once per event, after the engine state already reflects it.
/// Implementations must not assume any timing between calls.
pub trait BoardRenderer {
    /// Show one event.
    fn render(&mut self, board: &Board, event: &GameEvent);
}

impl<R: BoardRenderer + ?Sized> BoardRenderer for &mut R {
    fn render(&mut self, board: &Board, event: &GameEvent) {
        (**self).render(board, event);
    }
}
