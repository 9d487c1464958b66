//! Text rendering shared by the board types.

use crate::position::Position;
use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter, Write};

const COLUMN_LABELS: &str = "ABCDEFGH";

/// Write a labeled 8x8 grid, columns A-H across and rows 1-8 down.
/// `glyph` picks the character shown for each space.
pub fn format_grid(f: &mut Formatter, glyph: impl Fn(Position) -> char) -> fmt::Result {
    f.write_str("  ")?;
    for label in COLUMN_LABELS.chars() {
        f.write_char(' ')?;
        f.write_char(label)?;
    }

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            f.write_char(glyph(Position::from_index(row * EDGE_LENGTH + col)))?;
            f.write_char(' ')?;
        }
    }

    Ok(())
}
