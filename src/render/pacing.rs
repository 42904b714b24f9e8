//! Presentation timing.
//!
//! Delays belong to the renderer, not the engine. Setting every delay to
//! zero changes nothing about the outcome of a turn.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::DiceSource;
use crate::engine::{EventKind, Phase, TurnEngine};
use crate::error::TurnError;

use super::BoardRenderer;

/// Delays used by `present_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// After each decorative die face.
    pub flicker: Duration,
    /// After the token steps forward.
    pub settle_move: Duration,
    /// Before a snake or ladder slide.
    pub settle_shortcut: Duration,
}

impl Pacing {
    /// No delays at all.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            flicker: Duration::ZERO,
            settle_move: Duration::ZERO,
            settle_shortcut: Duration::ZERO,
        }
    }

    /// Pause after `kind` has been rendered.
    #[must_use]
    pub fn delay_after(&self, kind: &EventKind) -> Duration {
        match kind {
            EventKind::CosmeticRoll { .. } => self.flicker,
            EventKind::Moved => self.settle_move,
            _ => Duration::ZERO,
        }
    }

    /// Pause before `kind` is rendered.
    #[must_use]
    pub fn delay_before(&self, kind: &EventKind) -> Duration {
        match kind {
            EventKind::Descended { .. } | EventKind::Ascended { .. } => self.settle_shortcut,
            _ => Duration::ZERO,
        }
    }

    fn wait(delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            flicker: Duration::from_millis(60),
            settle_move: Duration::from_millis(600),
            settle_shortcut: Duration::from_millis(500),
        }
    }
}

/// Play one turn through `renderer`, pausing between events.
///
/// Returns the phase the engine ends in. Fails without side effects if the
/// engine is not accepting a roll.
pub fn present_turn<D, R>(
    engine: &mut TurnEngine<D>,
    renderer: &mut R,
    pacing: &Pacing,
) -> Result<Phase, TurnError>
where
    D: DiceSource,
    R: BoardRenderer + ?Sized,
{
    engine.begin_turn()?;

    while let Some(event) = engine.next_event() {
        Pacing::wait(pacing.delay_before(&event.kind));
        renderer.render(engine.board(), &event);
        Pacing::wait(pacing.delay_after(&event.kind));
    }

    Ok(engine.phase())
}
