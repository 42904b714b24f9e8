//! Error types.
//!
//! Board construction fails loudly with a `ConfigError`; a bad board never
//! reaches the turn engine. `TurnError` is the only runtime error and is
//! never fatal.

use thiserror::Error;

use crate::board::ShortcutKind;
use crate::core::Square;
use crate::engine::Phase;

/// Board topology violation, detected at construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least 2 squares, got {size}")]
    BoardTooSmall { size: u16 },

    #[error("row width must be positive")]
    ZeroRowWidth,

    #[error("{kind} {from} -> {to} leaves the board of {size} squares")]
    OutOfRange {
        kind: ShortcutKind,
        from: Square,
        to: Square,
        size: u16,
    },

    #[error("descent {from} -> {to} does not move down")]
    NotDescending { from: Square, to: Square },

    #[error("ascent {from} -> {to} does not move up")]
    NotAscending { from: Square, to: Square },

    #[error("{kind} origin {origin} appears more than once")]
    DuplicateOrigin { kind: ShortcutKind, origin: Square },

    #[error("{origin} is both a descent and an ascent origin")]
    OverlappingOrigin { origin: Square },

    #[error("{kind} starts on the finish square {origin}")]
    OriginAtFinish { kind: ShortcutKind, origin: Square },

    #[error("{kind} {from} -> {to} lands on another shortcut origin")]
    ChainedShortcut {
        kind: ShortcutKind,
        from: Square,
        to: Square,
    },
}

/// Turn engine misuse. Ignored by `roll_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("cannot roll while {phase}")]
    InvalidTransition { phase: Phase },

    #[error("die rolled {value}, expected 1-6")]
    InvalidRoll { value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::NotDescending {
            from: Square::new(6),
            to: Square::new(16),
        };
        assert_eq!(err.to_string(), "descent square 6 -> square 16 does not move down");

        let err = ConfigError::OverlappingOrigin { origin: Square::new(16) };
        assert_eq!(err.to_string(), "square 16 is both a descent and an ascent origin");
    }

    #[test]
    fn test_turn_error_message() {
        let err = TurnError::InvalidTransition { phase: Phase::Won };
        assert_eq!(err.to_string(), "cannot roll while won");

        let err = TurnError::InvalidRoll { value: 0 };
        assert_eq!(err.to_string(), "die rolled 0, expected 1-6");
    }
}
