//! The 8x8 Othello board and the rules for a single move.
//!
//! A [`Board`] is an immutable snapshot: [`Board::apply_move`] returns a new
//! value and leaves its input untouched, so searches can explore hypothetical
//! futures freely.

use crate::bitboard::{self, Bitboard};
use crate::game::{Outcome, Player};
use crate::position::{Position, PositionList, DIRECTIONS};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of a single space.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

/// Disc counts for both colors.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// White's discs minus Black's discs.
    #[inline]
    pub fn difference(self) -> i32 {
        i32::from(self.white) - i32::from(self.black)
    }

    /// The number of occupied spaces.
    #[inline]
    pub fn total(self) -> u8 {
        self.black + self.white
    }
}

/// A complete board: one bitboard per color, never overlapping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub const fn new() -> Self {
        Self {
            black: bitboard::BLACK_START,
            white: bitboard::WHITE_START,
        }
    }

    /// A board with no discs at all.
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// Build a board from one bitboard per color.
    /// Returns None if the two colors share a space.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Option<Self> {
        if (black & white).is_empty() {
            Some(Self { black, white })
        } else {
            None
        }
    }

    /// Build a board from a row-major grid of cells.
    pub fn from_cells(cells: [[CellState; EDGE_LENGTH]; EDGE_LENGTH]) -> Self {
        let mut board = Self::empty();
        for (row, line) in cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if let Some(pos) = Position::from_coords(row, col) {
                    board = board.with_cell(pos, cell);
                }
            }
        }
        board
    }

    /// A copy of this board with `pos` overwritten, with no flipping.
    pub fn with_cell(self, pos: Position, cell: CellState) -> Self {
        let mask = Bitboard::from(pos);
        let black = self.black & !mask;
        let white = self.white & !mask;
        match cell {
            CellState::Empty => Self { black, white },
            CellState::Black => Self {
                black: black | mask,
                white,
            },
            CellState::White => Self {
                black,
                white: white | mask,
            },
        }
    }

    /// The contents of the space at `pos`.
    pub fn get(self, pos: Position) -> CellState {
        let mask = Bitboard::from(pos);
        if !(self.black & mask).is_empty() {
            CellState::Black
        } else if !(self.white & mask).is_empty() {
            CellState::White
        } else {
            CellState::Empty
        }
    }

    /// The board as a row-major grid of cells.
    pub fn cells(self) -> [[CellState; EDGE_LENGTH]; EDGE_LENGTH] {
        let mut cells = [[CellState::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for index in 0..NUM_SPACES {
            let pos = Position::from_index(index);
            cells[pos.row()][pos.col()] = self.get(pos);
        }
        cells
    }

    /// The discs belonging to `player`.
    #[inline]
    pub fn pieces(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.black | self.white
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    #[inline]
    pub fn count_empty(self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// The opponent discs that `player` would flip by moving at `pos`.
    ///
    /// Each direction is scanned independently against this board: a run of
    /// opponent discs is captured only if it ends on one of `player`'s discs.
    /// The result is empty exactly when the move is illegal, including when
    /// `pos` is already occupied.
    pub fn flips(self, pos: Position, player: Player) -> Bitboard {
        let origin = Bitboard::from(pos);
        if !(origin & self.occupied_mask()).is_empty() {
            return Bitboard::EMPTY;
        }

        let own = self.pieces(player);
        let opponent = self.pieces(!player);
        let mut flips = Bitboard::EMPTY;

        for &dir in DIRECTIONS.iter() {
            let mut run = Bitboard::EMPTY;
            let mut cursor = origin.shift(dir);
            while !(cursor & opponent).is_empty() {
                run |= cursor;
                cursor = cursor.shift(dir);
            }

            // Running off the board leaves the cursor empty.
            if !(cursor & own).is_empty() {
                flips |= run;
            }
        }

        flips
    }

    /// Returns whether `player` may move at `pos`.
    #[inline]
    pub fn is_legal(self, pos: Position, player: Player) -> bool {
        !self.flips(pos, player).is_empty()
    }

    /// Get a mask of the legal moves for `player`.
    pub fn move_mask(self, player: Player) -> Bitboard {
        let own = self.pieces(player);
        let opponent = self.pieces(!player);
        let empties = self.empty_mask();
        let mut moves = Bitboard::EMPTY;

        // Smear our discs across adjacent opponent runs in each direction.
        // At most six opponent discs fit between a move and its anchor.
        for &dir in DIRECTIONS.iter() {
            let mut run = own.shift(dir) & opponent;
            for _ in 0..5 {
                run |= run.shift(dir) & opponent;
            }
            moves |= run.shift(dir) & empties;
        }

        moves
    }

    /// All legal moves for `player`, in row-major order.
    #[inline]
    pub fn legal_moves(self, player: Player) -> PositionList {
        PositionList::from(self.move_mask(player))
    }

    /// Returns whether `player` has at least one legal move.
    #[inline]
    pub fn has_legal_move(self, player: Player) -> bool {
        !self.move_mask(player).is_empty()
    }

    /// Place a disc for `player` at `pos` and flip every captured run.
    /// An illegal move returns the board unchanged.
    pub fn apply_move(self, pos: Position, player: Player) -> Self {
        let flips = self.flips(pos, player);
        if flips.is_empty() {
            return self;
        }

        let own = self.pieces(player) | flips | Bitboard::from(pos);
        let opponent = self.pieces(!player) ^ flips;
        match player {
            Player::Black => Self {
                black: own,
                white: opponent,
            },
            Player::White => Self {
                black: opponent,
                white: own,
            },
        }
    }

    /// Count the discs of each color.
    #[inline]
    pub fn score(self) -> Score {
        Score {
            black: self.black.count_occupied(),
            white: self.white.count_occupied(),
        }
    }

    /// Returns whether neither player can move.
    pub fn is_terminal(self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// Compare disc counts. Meaningful at any time, decisive once terminal.
    pub fn winner(self) -> Outcome {
        let score = self.score();
        if score.black > score.white {
            Outcome::Winner(Player::Black)
        } else if score.white > score.black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |pos| match self.get(pos) {
            CellState::Empty => '.',
            CellState::Black => 'X',
            CellState::White => 'O',
        })
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 cells, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown cell character {:?}", cell)]
    UnknownCell { cell: char },
}

/// Parse a board from 64 cell characters in row-major order.
/// `X` or `B` is Black, `O` or `W` is White, `-` or `.` is empty; whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found: cells.len() });
        }

        let mut board = Self::empty();
        for (index, &cell) in cells.iter().enumerate() {
            let state = match cell.to_ascii_uppercase() {
                'X' | 'B' => CellState::Black,
                'O' | 'W' => CellState::White,
                '-' | '.' => CellState::Empty,
                _ => return Err(ParseBoardError::UnknownCell { cell }),
            };
            board = board.with_cell(Position::from_index(index), state);
        }

        Ok(board)
    }
}
