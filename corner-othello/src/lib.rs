//! `corner-othello` holds the rules of Othello for a human-versus-computer game.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw operations on packed `u64` boards: counting,
//!    iterating and shifting one step along a [`Direction`].
//!  - [`Board`] is an immutable 8x8 snapshot and implements the move rules:
//!    legality, flips, scoring and termination. Every move yields a new value.
//!  - [`Game`] is the turn-order state machine a UI or orchestrator drives. It
//!    rejects out-of-turn and illegal moves and handles forced passes.
//!
//! The human always plays [`Player::Black`] and moves first; the computer is
//! [`Player::White`].

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod position;
mod utils;

pub use board::*;
pub use game::*;
pub use position::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
