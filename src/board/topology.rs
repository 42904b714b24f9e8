//! Validated board topology.
//!
//! A `Board` is the checked, immutable form of a `BoardConfig`. All
//! invariants are verified once in `Board::new`; lookups afterwards cannot
//! fail.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, Square};
use crate::error::ConfigError;

use super::GridLayout;

/// Which shortcut map an entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutKind {
    /// Moves the token down (snake).
    Descent,
    /// Moves the token up (ladder).
    Ascent,
}

impl std::fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortcutKind::Descent => write!(f, "descent"),
            ShortcutKind::Ascent => write!(f, "ascent"),
        }
    }
}

/// A single connector between two squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub kind: ShortcutKind,
    pub from: Square,
    pub to: Square,
}

/// Immutable track plus shortcut maps.
///
/// ## Invariants
///
/// - Every origin and destination lies in `1..=size`
/// - Descents move strictly down, ascents strictly up
/// - No square is an origin in both maps, or twice in one map
/// - The finish square is never an origin
/// - No destination is itself an origin, so one shortcut per turn is enough
#[derive(Clone, Debug)]
pub struct Board {
    size: u16,
    row_width: u16,
    descents: FxHashMap<Square, Square>,
    ascents: FxHashMap<Square, Square>,
}

impl Board {
    /// Validate a configuration and build the board.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        if config.size < 2 {
            return Err(ConfigError::BoardTooSmall { size: config.size });
        }
        if config.row_width == 0 {
            return Err(ConfigError::ZeroRowWidth);
        }

        let descents = build_map(config.size, ShortcutKind::Descent, &config.descents)?;
        let ascents = build_map(config.size, ShortcutKind::Ascent, &config.ascents)?;

        if let Some(&origin) = descents.keys().find(|k| ascents.contains_key(*k)) {
            return Err(ConfigError::OverlappingOrigin { origin });
        }

        let board = Self {
            size: config.size,
            row_width: config.row_width,
            descents,
            ascents,
        };

        if let Some(chained) = board
            .shortcuts()
            .find(|s| board.descents.contains_key(&s.to) || board.ascents.contains_key(&s.to))
        {
            return Err(ConfigError::ChainedShortcut {
                kind: chained.kind,
                from: chained.from,
                to: chained.to,
            });
        }

        log::debug!(
            "board ready: {} squares, {} descents, {} ascents",
            board.size,
            board.descents.len(),
            board.ascents.len()
        );

        Ok(board)
    }

    /// The reference 10x10 board.
    pub fn classic() -> Result<Self, ConfigError> {
        Self::new(&BoardConfig::classic())
    }

    /// Number of squares.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Squares per rendered row.
    #[must_use]
    pub fn row_width(&self) -> u16 {
        self.row_width
    }

    /// The starting square.
    #[must_use]
    pub fn start(&self) -> Square {
        Square::START
    }

    /// The terminal square. Landing here wins.
    #[must_use]
    pub fn finish(&self) -> Square {
        Square::new(self.size)
    }

    /// Destination if `square` is a descent origin.
    #[must_use]
    pub fn descent_of(&self, square: Square) -> Option<Square> {
        self.descents.get(&square).copied()
    }

    /// Destination if `square` is an ascent origin.
    #[must_use]
    pub fn ascent_of(&self, square: Square) -> Option<Square> {
        self.ascents.get(&square).copied()
    }

    /// Shortcut originating at `square`, descents first.
    #[must_use]
    pub fn shortcut_at(&self, square: Square) -> Option<Shortcut> {
        let descent = self.descent_of(square).map(|to| Shortcut {
            kind: ShortcutKind::Descent,
            from: square,
            to,
        });
        descent.or_else(|| {
            self.ascent_of(square).map(|to| Shortcut {
                kind: ShortcutKind::Ascent,
                from: square,
                to,
            })
        })
    }

    /// Every connector on the board, descents first, each group sorted by
    /// origin.
    pub fn shortcuts(&self) -> impl Iterator<Item = Shortcut> + '_ {
        let mut descents: Vec<_> = self.descents.iter().collect();
        descents.sort_unstable();
        let mut ascents: Vec<_> = self.ascents.iter().collect();
        ascents.sort_unstable();

        let descents = descents.into_iter().map(|(&from, &to)| Shortcut {
            kind: ShortcutKind::Descent,
            from,
            to,
        });
        let ascents = ascents.into_iter().map(|(&from, &to)| Shortcut {
            kind: ShortcutKind::Ascent,
            from,
            to,
        });
        descents.chain(ascents)
    }

    /// Grid placement for renderers.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.size, self.row_width)
    }
}

fn build_map(
    size: u16,
    kind: ShortcutKind,
    entries: &[(Square, Square)],
) -> Result<FxHashMap<Square, Square>, ConfigError> {
    let mut map = FxHashMap::default();
    let in_range = |s: Square| (1..=size).contains(&s.number());

    for &(from, to) in entries {
        if !in_range(from) || !in_range(to) {
            return Err(ConfigError::OutOfRange { kind, from, to, size });
        }
        match kind {
            ShortcutKind::Descent if to >= from => {
                return Err(ConfigError::NotDescending { from, to });
            }
            ShortcutKind::Ascent if to <= from => {
                return Err(ConfigError::NotAscending { from, to });
            }
            _ => {}
        }
        if from.number() == size {
            return Err(ConfigError::OriginAtFinish { kind, origin: from });
        }
        if map.insert(from, to).is_some() {
            return Err(ConfigError::DuplicateOrigin { kind, origin: from });
        }
    }

    Ok(map)
}
