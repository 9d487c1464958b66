//! Low-level bitboard operations.
//!
//! A [`Bitboard`] holds one bit per space. By convention, the MSB is the
//! upper-left space (row 0, column 0) and bits proceed in row-major order, so
//! bit `63 - (8 * row + col)` stands for `(row, col)`.

use crate::{utils, Direction};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: (3, 4) and (4, 3).
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: (3, 3) and (4, 4).
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

// Spaces in the leftmost and rightmost columns.
const COLUMN_0: u64 = 0x8080_8080_8080_8080;
const COLUMN_7: u64 = 0x0101_0101_0101_0101;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |pos| {
            if (*self & Bitboard::from(pos)).is_empty() {
                '.'
            } else {
                '#'
            }
        })
    }
}

impl Bitboard {
    /// A bitboard with no spaces set.
    pub const EMPTY: Self = Self(0);

    /// A bitboard with every space set.
    pub const FULL: Self = Self(u64::MAX);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Move every set bit one space along `dir`.
    /// Bits pushed off the board in any direction are dropped, never wrapped.
    #[inline]
    pub fn shift(self, dir: Direction) -> Self {
        // One row down is eight bits toward the LSB; one column right is one bit.
        let offset = 8 * i32::from(dir.row) + i32::from(dir.col);
        let shifted = if offset >= 0 {
            self.0 >> offset
        } else {
            self.0 << -offset
        };

        // A bit leaving the right edge lands in column 0 of the next row, and vice versa.
        let wrapped = match dir.col {
            1 => COLUMN_0,
            -1 => COLUMN_7,
            _ => 0,
        };

        Self(shifted & !wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DIRECTIONS;

    const TOP_LEFT: Bitboard = Bitboard(1 << 63);
    const BOTTOM_RIGHT: Bitboard = Bitboard(1);

    #[test]
    fn start_counts() {
        assert_eq!(BLACK_START.count_occupied(), 2);
        assert_eq!(WHITE_START.count_occupied(), 2);
        assert!((BLACK_START & WHITE_START).is_empty());
        assert_eq!((BLACK_START | WHITE_START).count_empty(), 60);
    }

    #[test]
    fn shift_along_axes() {
        let east = Direction { row: 0, col: 1 };
        let south = Direction { row: 1, col: 0 };
        assert_eq!(TOP_LEFT.shift(east), Bitboard(1 << 62));
        assert_eq!(TOP_LEFT.shift(south), Bitboard(1 << 55));
        assert_eq!(BOTTOM_RIGHT.shift(Direction { row: -1, col: 0 }), Bitboard(1 << 8));
    }

    #[test]
    fn shift_drops_bits_off_the_edges() {
        // Every direction pointing away from the board loses the corner bit.
        for &dir in DIRECTIONS.iter() {
            if dir.row < 0 || dir.col < 0 {
                assert!(TOP_LEFT.shift(dir).is_empty(), "{:?}", dir);
            }
            if dir.row > 0 || dir.col > 0 {
                assert!(BOTTOM_RIGHT.shift(dir).is_empty(), "{:?}", dir);
            }
        }
    }

    #[test]
    fn shift_does_not_wrap_rows() {
        let right_column = Bitboard(COLUMN_7);
        assert!(right_column.shift(Direction { row: 0, col: 1 }).is_empty());
        assert!(right_column.shift(Direction { row: 1, col: 1 }).is_empty());
        assert!(right_column.shift(Direction { row: -1, col: 1 }).is_empty());

        let left_column = Bitboard(COLUMN_0);
        assert!(left_column.shift(Direction { row: 0, col: -1 }).is_empty());
        assert!(left_column.shift(Direction { row: 1, col: -1 }).is_empty());
        assert!(left_column.shift(Direction { row: -1, col: -1 }).is_empty());
    }

    #[test]
    fn display_grid() {
        let rendered = TOP_LEFT.to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("   A B C D E F G H"));
        assert_eq!(lines.next(), Some(" 1 # . . . . . . . "));
        assert_eq!(lines.count(), 7);
    }
}
