//! The intermediate opponent: a single-ply heuristic.

use crate::Strategy;
use corner_othello::{Board, CellState, Player, Position};
use tracing::trace;

const CORNER_BONUS: i32 = 100;
const EDGE_BONUS: i32 = 10;
const CORNER_ADJACENT_PENALTY: i32 = 50;

/// Score White moving at `pos`: disc difference afterwards, plus bonuses for
/// corners and edges, minus a penalty for touching a corner that is still open.
/// `pos` should be legal; otherwise the board is scored as it stands.
pub fn score_move(board: Board, pos: Position) -> i32 {
    let after = board.apply_move(pos, Player::White);
    let mut score = after.score().difference();

    if pos.is_corner() {
        score += CORNER_BONUS;
    }
    if pos.is_edge() {
        score += EDGE_BONUS;
    }
    if pos.is_corner_adjacent() && after.get(pos.nearest_corner()) == CellState::Empty {
        score -= CORNER_ADJACENT_PENALTY;
    }

    score
}

/// Plays the highest-scoring move by [`score_move`]; the earliest in row-major order wins ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayer;

impl Strategy for GreedyPlayer {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose_move(&mut self, board: Board) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;

        for pos in board.legal_moves(Player::White) {
            let score = score_move(board, pos);
            trace!(%pos, score, "greedy candidate");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        best.map(|(pos, _)| pos)
    }
}
