//! Deterministic dice for turn resolution.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Context streams**: Independent sequences for different purposes, so
//!   decorative dice never disturb the committed rolls
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: `ForcedRolls` replays a fixed sequence for tests
//!
//! ## Usage
//!
//! ```
//! use ladderboard::core::{DiceSource, Die, GameRng};
//!
//! let mut die = Die::new(42);
//! let face = die.roll();
//! assert!((1..=6).contains(&face));
//!
//! // A context stream is independent of the die it was derived from
//! let mut flicker = GameRng::new(42).for_context("cosmetic");
//! let decorative = flicker.roll_face();
//! assert!((1..=6).contains(&decorative));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Source of uniformly distributed die faces in `1..=6`.
///
/// The engine consumes exactly one value per committed roll.
pub trait DiceSource {
    /// Roll once. Must return a value in `1..=DIE_FACES`.
    fn roll(&mut self) -> u8;
}

/// Deterministic RNG backed by ChaCha8.
///
/// Supports context-based independent streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Roll a single die face in `1..=6`.
    pub fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A fair six-sided die.
#[derive(Clone, Debug)]
pub struct Die {
    rng: GameRng,
}

impl Die {
    /// Create a die seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("die"),
        }
    }
}

impl DiceSource for Die {
    fn roll(&mut self) -> u8 {
        self.rng.roll_face()
    }
}

/// Scripted die that replays a fixed sequence of faces, cycling when the
/// script runs out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForcedRolls {
    script: Vec<u8>,
    cursor: usize,
}

impl ForcedRolls {
    /// Create a scripted die.
    ///
    /// # Panics
    ///
    /// Panics if the script is empty or contains a value outside `1..=6`.
    #[must_use]
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "Forced roll script must not be empty");
        assert!(
            script.iter().all(|face| (1..=DIE_FACES).contains(face)),
            "Forced rolls must be die faces 1-6"
        );

        Self { script, cursor: 0 }
    }

    /// Start the script over from the first face.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Number of faces consumed since creation or the last rewind.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ForcedRolls {
    fn roll(&mut self) -> u8 {
        let face = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        face
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}
