//! Zigzag grid placement.
//!
//! Squares snake up the grid: the bottom row runs left to right, the row
//! above it right to left, and so on. Row 0 is the top display row.
//! Only renderers use this; move resolution never looks at coordinates.

use serde::{Deserialize, Serialize};

use crate::core::Square;

/// Display coordinates of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Display row, 0 at the top.
    pub row: u16,
    /// Display column, 0 at the left.
    pub col: u16,
}

/// Maps squares to grid cells and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    size: u16,
    width: u16,
    rows: u16,
}

impl GridLayout {
    /// Create a layout for `size` squares, `width` per row.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero. `Board` never builds one that way.
    #[must_use]
    pub fn new(size: u16, width: u16) -> Self {
        assert!(width > 0, "Grid width must be positive");
        Self {
            size,
            width,
            rows: size.div_ceil(width),
        }
    }

    /// Number of display rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of display columns.
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.width
    }

    /// Where `square` is drawn, or `None` if it is off the board.
    #[must_use]
    pub fn cell_of(&self, square: Square) -> Option<GridCell> {
        let number = square.number();
        if number == 0 || number > self.size {
            return None;
        }

        let index = number - 1;
        let logic_row = index / self.width;
        let offset = index % self.width;
        let col = if logic_row % 2 == 0 {
            offset
        } else {
            self.width - 1 - offset
        };

        Some(GridCell {
            row: self.rows - 1 - logic_row,
            col,
        })
    }

    /// Which square is drawn at `cell`, or `None` for an empty cell.
    #[must_use]
    pub fn square_at(&self, cell: GridCell) -> Option<Square> {
        if cell.row >= self.rows || cell.col >= self.width {
            return None;
        }

        let logic_row = self.rows - 1 - cell.row;
        let offset = if logic_row % 2 == 0 {
            cell.col
        } else {
            self.width - 1 - cell.col
        };
        let number = u32::from(logic_row) * u32::from(self.width) + u32::from(offset) + 1;

        u16::try_from(number)
            .ok()
            .filter(|&n| n <= self.size)
            .map(Square::new)
    }
}
