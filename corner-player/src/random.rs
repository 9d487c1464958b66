//! The beginner opponent.

use crate::Strategy;
use corner_othello::{Board, Player, Position};
use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Picks uniformly among White's legal moves.
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomPlayer<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Strategy for RandomPlayer<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, board: Board) -> Option<Position> {
        board.legal_moves(Player::White).choose(&mut self.rng)
    }
}
