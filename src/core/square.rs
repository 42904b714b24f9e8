//! Square identification on the track.
//!
//! ## Square
//!
//! Type-safe 1-based square number. The first square of every board is
//! `Square(1)`; the last is the board size.

use serde::{Deserialize, Serialize};

/// A numbered square on the track.
///
/// Squares are 1-based: the starting square is `Square(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square(pub u16);

impl Square {
    /// The starting square of every board.
    pub const START: Square = Square(1);

    /// Create a new square.
    #[must_use]
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    /// Get the raw square number (1-based).
    #[must_use]
    pub const fn number(self) -> u16 {
        self.0
    }

    /// Advance by `steps` squares, or `None` past the last representable
    /// square. Board bounds are the caller's business.
    ///
    /// ```
    /// use ladderboard::core::Square;
    ///
    /// assert_eq!(Square::new(10).advanced(6), Some(Square::new(16)));
    /// assert_eq!(Square::new(u16::MAX - 2).advanced(6), None);
    /// ```
    #[must_use]
    pub const fn advanced(self, steps: u8) -> Option<Self> {
        match self.0.checked_add(steps as u16) {
            Some(number) => Some(Self(number)),
            None => None,
        }
    }

    /// Number of squares from `self` forward to `target`, or 0 if `target`
    /// is not ahead.
    #[must_use]
    pub const fn distance_to(self, target: Square) -> u16 {
        target.0.saturating_sub(self.0)
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "square {}", self.0)
    }
}
