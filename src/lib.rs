//! # ladderboard
//!
//! A deterministic snakes-and-ladders turn engine.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns the Truth**: The token position lives only in the
//!    `TurnEngine`. Renderers receive events and never write back.
//!
//! 2. **Validate Early**: A `Board` cannot be built from a bad
//!    `BoardConfig`. No shortcut defect survives to the first roll.
//!
//! 3. **Time Is Presentation**: A turn is an ordered list of events. How
//!    long to wait between them is the renderer's business.
//!
//! ## Modules
//!
//! - `core`: Squares, dice, configuration
//! - `board`: Validated topology and grid layout
//! - `engine`: Game state, events, and the turn state machine
//! - `render`: Renderer capability, pacing, and a text status renderer
//! - `error`: Configuration and transition errors

pub mod core;
pub mod board;
pub mod engine;
pub mod render;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Square,
    DiceSource, Die, ForcedRolls, GameRng, GameRngState,
    BoardConfig, EngineConfig,
};

pub use crate::board::{Board, Shortcut, ShortcutKind, GridCell, GridLayout};

pub use crate::engine::{EventKind, GameEvent, GameState, Phase, TurnEngine};

pub use crate::render::{present_turn, BoardRenderer, Pacing, StatusLog};

pub use crate::error::{ConfigError, TurnError};
