//! Core engine types: squares, dice, configuration.
//!
//! This module contains the building blocks shared by the board and the
//! turn engine. Boards are described via `BoardConfig` rather than code.

pub mod square;
pub mod rng;
pub mod config;

pub use square::Square;
pub use rng::{DiceSource, Die, ForcedRolls, GameRng, GameRngState, DIE_FACES};
pub use config::{BoardConfig, EngineConfig, CLASSIC_ROW_WIDTH, CLASSIC_SIZE};
