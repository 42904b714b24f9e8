//! Turn events.
//!
//! The engine reports everything that happens during a turn as an ordered
//! stream of `GameEvent`s. Renderers consume the stream; they never feed
//! anything back into the engine.

use serde::{Deserialize, Serialize};

use crate::core::Square;

use super::Phase;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Decorative die face shown while the die "tumbles". Never used for
    /// movement.
    CosmeticRoll { face: u8 },

    /// The roll that moves the token.
    RollCommitted { value: u8 },

    /// The roll would pass the finish. The token stays put and `needed`
    /// is the exact roll that would win.
    Overshoot { needed: u16 },

    /// The token stepped forward by the committed roll.
    Moved,

    /// The token landed on a descent origin and slid down.
    Descended { from: Square, to: Square },

    /// The token landed on an ascent origin and climbed up.
    Ascended { from: Square, to: Square },

    /// The token reached the finish.
    Victory,

    /// The turn is over and the engine accepts the next roll.
    AwaitingRoll,

    /// The game was reset to the start.
    Reset,
}

impl EventKind {
    /// Phase the engine enters once this event is delivered, if it changes.
    #[must_use]
    pub fn phase_after(&self) -> Option<Phase> {
        match self {
            EventKind::Victory => Some(Phase::Won),
            EventKind::Overshoot { .. } | EventKind::AwaitingRoll | EventKind::Reset => {
                Some(Phase::Idle)
            }
            _ => None,
        }
    }

    /// True for the last event of a turn.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(
            self,
            EventKind::Overshoot { .. } | EventKind::Victory | EventKind::AwaitingRoll
        )
    }
}

/// A single engine event.
///
/// `position` is where the token stands once the event has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    pub position: Square,
}

impl GameEvent {
    /// Create a new event.
    #[must_use]
    pub fn new(kind: EventKind, position: Square) -> Self {
        Self { kind, position }
    }

    /// Create a shortcut event: `Descended` if `to < from`, else `Ascended`.
    #[must_use]
    pub fn shortcut(from: Square, to: Square) -> Self {
        let kind = if to < from {
            EventKind::Descended { from, to }
        } else {
            EventKind::Ascended { from, to }
        };
        Self::new(kind, to)
    }

    /// The committed roll carried by this event, if any.
    #[must_use]
    pub fn committed_roll(&self) -> Option<u8> {
        match self.kind {
            EventKind::RollCommitted { value } => Some(value),
            _ => None,
        }
    }

    /// True for decorative events that carry no game information.
    #[must_use]
    pub fn is_cosmetic(&self) -> bool {
        matches!(self.kind, EventKind::CosmeticRoll { .. })
    }
}
