//! Code for working with [`Position`]s and board geometry.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A unit step between neighboring spaces, in rows and columns.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Direction {
    pub row: i8,
    pub col: i8,
}

/// The eight directions a ray can be scanned in: four axes, then four diagonals.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { row: -1, col: 0 },
    Direction { row: 1, col: 0 },
    Direction { row: 0, col: -1 },
    Direction { row: 0, col: 1 },
    Direction { row: -1, col: -1 },
    Direction { row: -1, col: 1 },
    Direction { row: 1, col: -1 },
    Direction { row: 1, col: 1 },
];

/// Returns whether `(row, col)` lies on the board.
#[inline]
pub fn in_bounds(row: isize, col: isize) -> bool {
    let edge = EDGE_LENGTH as isize;
    (0..edge).contains(&row) && (0..edge).contains(&col)
}

/// A space on the Othello board, stored as a one-hot [`Bitboard`].
/// Always in bounds: the only constructors validate their input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Into)]
pub struct Position(Bitboard);

/// A set of positions on the Othello board, iterated in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct PositionList(Bitboard);

impl Position {
    /// Convert from row and column coordinates.
    /// Returns None if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return None;
        }
        Some(Self::from_index(row * EDGE_LENGTH + col))
    }

    /// Convert from a row-major square index in `0..64`.
    /// Panics if `index` is off the board.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < EDGE_LENGTH * EDGE_LENGTH);
        Self(Bitboard::from(1u64 << (63 - index)))
    }

    /// Convert into a row-major square index in `0..64`.
    #[inline]
    pub fn index(self) -> usize {
        let bitboard: u64 = self.0.into();
        63 - bitboard.trailing_zeros() as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % EDGE_LENGTH
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// The neighboring position one step along `dir`, if it is on the board.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let row = self.row() as isize + isize::from(dir.row);
        let col = self.col() as isize + isize::from(dir.col);
        if in_bounds(row, col) {
            Self::from_coords(row as usize, col as usize)
        } else {
            None
        }
    }

    /// Whether this is one of the four corners.
    pub fn is_corner(self) -> bool {
        let last = EDGE_LENGTH - 1;
        (self.row() == 0 || self.row() == last) && (self.col() == 0 || self.col() == last)
    }

    /// Whether this lies on the outermost ring (corners included).
    pub fn is_edge(self) -> bool {
        let last = EDGE_LENGTH - 1;
        self.row() == 0 || self.row() == last || self.col() == 0 || self.col() == last
    }

    /// The corner nearest to this position, by quadrant.
    pub fn nearest_corner(self) -> Self {
        let last = EDGE_LENGTH - 1;
        let half = EDGE_LENGTH / 2;
        let row = if self.row() < half { 0 } else { last };
        let col = if self.col() < half { 0 } else { last };
        Self::from_index(row * EDGE_LENGTH + col)
    }

    /// Whether this is one of the twelve spaces touching a corner.
    pub fn is_corner_adjacent(self) -> bool {
        let corner = self.nearest_corner();
        self != corner
            && self.row().max(corner.row()) - self.row().min(corner.row()) <= 1
            && self.col().max(corner.col()) - self.col().min(corner.col()) <= 1
    }
}

/// Convert this [`Position`] into string notation ("A4").
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsePositionError;

impl Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position string")
    }
}

impl std::error::Error for ParsePositionError {}

/// Build a [`Position`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Self::from_coords(row - 1, col).ok_or(ParsePositionError)
    }
}

impl PositionList {
    /// Returns whether `pos` is in this list.
    pub fn contains(self, pos: Position) -> bool {
        let pos_bitboard: Bitboard = pos.into();
        !(pos_bitboard & self.0).is_empty()
    }

    /// Returns whether the list has no positions left.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl Iterator for PositionList {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0.is_empty() {
            return None;
        }

        // The highest set bit is the earliest in row-major order.
        let bitboard: u64 = self.0.into();
        let next_move: Bitboard = (1u64 << (63 - bitboard.leading_zeros())).into();
        self.0 ^= next_move;

        Some(Position(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PositionList {}

impl Display for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
