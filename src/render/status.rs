//! Text status renderer.
//!
//! Keeps the status line history, the die face on display, and where the
//! token is drawn. Useful on its own for terminal play and as a test double.

use crate::board::{Board, GridCell};
use crate::core::Square;
use crate::engine::{EventKind, GameEvent};

use super::BoardRenderer;

/// Status shown before the first roll and after a reset.
pub const START_STATUS: &str = "Start the game!";

/// Status lines for one event, oldest first. Empty for silent events.
#[must_use]
pub fn describe(event: &GameEvent) -> Vec<String> {
    match event.kind {
        EventKind::CosmeticRoll { .. } | EventKind::Moved => Vec::new(),
        EventKind::RollCommitted { value } => vec![format!("You rolled a {}!", value)],
        EventKind::Overshoot { needed } => vec![format!("Need {} to win!", needed)],
        EventKind::Descended { to, .. } => vec![
            "Oh no! A snake!".to_string(),
            format!("Slid down to {}", to.number()),
        ],
        EventKind::Ascended { to, .. } => vec![
            "Yay! A ladder!".to_string(),
            format!("Climbed up to {}", to.number()),
        ],
        EventKind::Victory => vec!["YOU WIN!".to_string()],
        EventKind::AwaitingRoll => vec!["Your turn to roll.".to_string()],
        EventKind::Reset => vec![START_STATUS.to_string()],
    }
}

/// Renderer that records status text.
#[derive(Clone, Debug)]
pub struct StatusLog {
    lines: Vec<String>,
    token: Square,
    cell: Option<GridCell>,
    die_face: Option<u8>,
}

impl StatusLog {
    /// Create an empty log with the token on the start square.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![START_STATUS.to_string()],
            token: Square::START,
            cell: None,
            die_face: None,
        }
    }

    /// Every status line so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The current status line.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Where the token is drawn.
    #[must_use]
    pub fn token(&self) -> Square {
        self.token
    }

    /// Grid cell of the token, once anything has been rendered.
    #[must_use]
    pub fn token_cell(&self) -> Option<GridCell> {
        self.cell
    }

    /// Die face on display. Cleared by a reset.
    #[must_use]
    pub fn die_face(&self) -> Option<u8> {
        self.die_face
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardRenderer for StatusLog {
    fn render(&mut self, board: &Board, event: &GameEvent) {
        match event.kind {
            EventKind::CosmeticRoll { face } => self.die_face = Some(face),
            EventKind::RollCommitted { value } => self.die_face = Some(value),
            EventKind::Reset => self.die_face = None,
            _ => {}
        }

        self.token = event.position;
        self.cell = board.layout().cell_of(event.position);
        self.lines.extend(describe(event));
    }
}
