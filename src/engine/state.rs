//! Game state owned by a single `TurnEngine`.

use serde::{Deserialize, Serialize};

use crate::core::Square;

/// Turn engine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting a roll.
    #[default]
    Idle,
    /// A turn's events are still being delivered. Rolls are rejected.
    Resolving,
    /// The token reached the finish. Only `reset` is accepted.
    Won,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Resolving => write!(f, "resolving"),
            Phase::Won => write!(f, "won"),
        }
    }
}

/// Token position and phase.
///
/// Snapshot type: copying it out of the engine never aliases engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Square the token stands on.
    pub position: Square,

    /// Current phase.
    pub phase: Phase,

    /// Committed rolls since the last reset, overshoots included.
    pub turns: u32,
}

impl GameState {
    /// State at game start: square 1, idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Square::START,
            phase: Phase::Idle,
            turns: 0,
        }
    }

    /// True while a turn's events are still being delivered.
    #[must_use]
    pub fn turn_in_progress(&self) -> bool {
        self.phase == Phase::Resolving
    }

    /// True once the finish has been reached.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.phase == Phase::Won
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.position, Square::new(1));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.turns, 0);
        assert!(!state.turn_in_progress());
        assert!(!state.has_won());
    }

    #[test]
    fn test_phase_flags() {
        let mut state = GameState::new();

        state.phase = Phase::Resolving;
        assert!(state.turn_in_progress());

        state.phase = Phase::Won;
        assert!(state.has_won());
        assert!(!state.turn_in_progress());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Idle.to_string(), "idle");
        assert_eq!(Phase::Resolving.to_string(), "resolving");
        assert_eq!(Phase::Won.to_string(), "won");
    }

    #[test]
    fn test_state_serde() {
        let state = GameState {
            position: Square::new(42),
            phase: Phase::Resolving,
            turns: 7,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
