//! Board and engine configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `BoardConfig`: Track length, grid width, and shortcut connections
//! - `EngineConfig`: Decorative dice settings for the turn engine
//!
//! Configurations are plain data. `Board::new` validates a `BoardConfig`;
//! nothing here checks invariants.

use serde::{Deserialize, Serialize};

use super::Square;

/// Squares on the classic board.
pub const CLASSIC_SIZE: u16 = 100;

/// Squares per grid row on the classic board.
pub const CLASSIC_ROW_WIDTH: u16 = 10;

/// Descents (snakes) on the classic board, `(head, tail)`.
const CLASSIC_DESCENTS: [(u16, u16); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Ascents (ladders) on the classic board, `(foot, top)`.
const CLASSIC_ASCENTS: [(u16, u16); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Complete board configuration.
///
/// Serializable so a loader can read boards from JSON or similar formats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of squares. The last square is the finish.
    pub size: u16,

    /// Squares per row in the rendered grid. Not used by move resolution.
    pub row_width: u16,

    /// Descent connections, `(from, to)` with `to < from`.
    #[serde(default)]
    pub descents: Vec<(Square, Square)>,

    /// Ascent connections, `(from, to)` with `to > from`.
    #[serde(default)]
    pub ascents: Vec<(Square, Square)>,
}

impl BoardConfig {
    /// Create an empty board with no shortcuts.
    #[must_use]
    pub fn new(size: u16, row_width: u16) -> Self {
        Self {
            size,
            row_width,
            descents: Vec::new(),
            ascents: Vec::new(),
        }
    }

    /// The reference 10x10 board.
    #[must_use]
    pub fn classic() -> Self {
        let config = Self::new(CLASSIC_SIZE, CLASSIC_ROW_WIDTH);
        let config = CLASSIC_DESCENTS
            .iter()
            .fold(config, |c, &(from, to)| c.with_descent(from, to));
        CLASSIC_ASCENTS
            .iter()
            .fold(config, |c, &(from, to)| c.with_ascent(from, to))
    }

    /// Add a descent (builder pattern).
    #[must_use]
    pub fn with_descent(mut self, from: u16, to: u16) -> Self {
        self.descents.push((Square::new(from), Square::new(to)));
        self
    }

    /// Add an ascent (builder pattern).
    #[must_use]
    pub fn with_ascent(mut self, from: u16, to: u16) -> Self {
        self.ascents.push((Square::new(from), Square::new(to)));
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Turn engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Decorative die faces shown before each committed roll.
    pub cosmetic_rolls: usize,

    /// Seed for the decorative stream. Independent of the real dice.
    pub cosmetic_seed: u64,
}

impl EngineConfig {
    /// Create a configuration with the default flicker count.
    #[must_use]
    pub fn new(cosmetic_seed: u64) -> Self {
        Self {
            cosmetic_rolls: 10,
            cosmetic_seed,
        }
    }

    /// Set the number of decorative faces per roll.
    #[must_use]
    pub fn with_cosmetic_rolls(mut self, count: usize) -> Self {
        self.cosmetic_rolls = count;
        self
    }

    /// Disable decorative faces entirely.
    #[must_use]
    pub fn without_cosmetics(self) -> Self {
        self.with_cosmetic_rolls(0)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
