//! Board topology: the track, its shortcuts, and grid placement.
//!
//! A `Board` is built once from a `BoardConfig` and never changes. All
//! topology defects are reported by `Board::new` before any turn is played.

pub mod topology;
pub mod layout;

pub use topology::{Board, Shortcut, ShortcutKind};
pub use layout::{GridCell, GridLayout};
