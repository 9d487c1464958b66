//! The advanced opponent: fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes [`eval::evaluate`] and Black minimizes it, alternating every
//! ply. A side with no legal move is not passed over: the node is scored
//! statically instead of searched deeper.

use crate::eval;
use crate::{SearchConfig, Strategy};
use arrayvec::ArrayVec;
use corner_othello::{Board, Player, Position, NUM_SPACES};
use tracing::{debug, trace};

// Larger than any evaluation can reach.
const INFINITY: i32 = i32::MAX;

/// The outcome of a root search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: Position,
    pub value: i32,
    /// Nodes visited below the root, leaves included.
    pub nodes: u64,
    /// Every root move with its minimax value, in row-major order.
    pub root_values: ArrayVec<(Position, i32), NUM_SPACES>,
}

/// Search White's moves `depth` plies deep (the root move counts as one).
/// Returns None exactly when White has no legal move.
pub fn search(board: Board, depth: u8) -> Option<SearchResult> {
    let depth = depth.max(1);
    let mut nodes = 0;

    // Each root move gets a full window so its value is exact and ties compare fairly.
    let root_values: ArrayVec<(Position, i32), NUM_SPACES> = board
        .legal_moves(Player::White)
        .map(|pos| {
            let child = board.apply_move(pos, Player::White);
            let value = alpha_beta(child, depth - 1, false, -INFINITY, INFINITY, &mut nodes);
            trace!(%pos, value, "root move");
            (pos, value)
        })
        .collect();

    let (best_move, value) = first_best(&root_values)?;
    Some(SearchResult {
        best_move,
        value,
        nodes,
        root_values,
    })
}

/// Plain minimax over the same tree, without pruning.
/// Returns the chosen move and its value, for checking [`search`].
pub fn search_unpruned(board: Board, depth: u8) -> Option<(Position, i32)> {
    let depth = depth.max(1);
    let root_values: Vec<(Position, i32)> = board
        .legal_moves(Player::White)
        .map(|pos| {
            let child = board.apply_move(pos, Player::White);
            (pos, value_unpruned(child, depth - 1, false))
        })
        .collect();

    first_best(&root_values)
}

/// The alpha-beta value of `board` with a full window.
pub fn value(board: Board, depth: u8, maximizing: bool) -> i32 {
    let mut nodes = 0;
    alpha_beta(board, depth, maximizing, -INFINITY, INFINITY, &mut nodes)
}

/// The minimax value of `board`, visiting every node.
pub fn value_unpruned(board: Board, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 {
        return eval::evaluate(board);
    }

    let player = side_to_move(maximizing);
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return eval::evaluate(board);
    }

    let values = moves.map(|pos| {
        let child = board.apply_move(pos, player);
        value_unpruned(child, depth - 1, !maximizing)
    });
    if maximizing {
        values.max().unwrap_or(-INFINITY)
    } else {
        values.min().unwrap_or(INFINITY)
    }
}

fn alpha_beta(
    board: Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return eval::evaluate(board);
    }

    let player = side_to_move(maximizing);
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return eval::evaluate(board);
    }

    if maximizing {
        let mut best = -INFINITY;
        for pos in moves {
            let child = board.apply_move(pos, player);
            let score = alpha_beta(child, depth - 1, false, alpha, beta, nodes);
            best = best.max(score);
            alpha = alpha.max(score);

            // Black already has a line at least this good elsewhere.
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for pos in moves {
            let child = board.apply_move(pos, player);
            let score = alpha_beta(child, depth - 1, true, alpha, beta, nodes);
            best = best.min(score);
            beta = beta.min(score);

            // White already has a line at least this good elsewhere.
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[inline]
fn side_to_move(maximizing: bool) -> Player {
    if maximizing {
        Player::White
    } else {
        Player::Black
    }
}

/// The first entry with the strictly greatest value.
fn first_best(values: &[(Position, i32)]) -> Option<(Position, i32)> {
    let mut best: Option<(Position, i32)> = None;
    for &(pos, value) in values {
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }
    best
}

/// Plays the move chosen by [`search`] at the configured depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxPlayer {
    config: SearchConfig,
}

impl MinimaxPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Strategy for MinimaxPlayer {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_move(&mut self, board: Board) -> Option<Position> {
        let result = search(board, self.config.depth)?;
        debug!(
            best = %result.best_move,
            value = result.value,
            nodes = result.nodes,
            depth = self.config.depth,
            "search finished"
        );
        Some(result.best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::from_coords(row, col).unwrap()
    }

    #[test]
    fn depth_one_is_static_lookahead() {
        let board = Board::new();
        let result = search(board, 1).unwrap();
        for &(mv, value) in result.root_values.iter() {
            assert_eq!(value, eval::evaluate(board.apply_move(mv, Player::White)));
        }
        assert_eq!(result.nodes, 4);
    }

    #[test]
    fn zero_depth_acts_as_one() {
        assert_eq!(search(Board::new(), 0), search(Board::new(), 1));
    }

    #[test]
    fn root_values_are_row_major() {
        let result = search(Board::new(), 3).unwrap();
        let moves: Vec<Position> = result.root_values.iter().map(|&(mv, _)| mv).collect();
        assert_eq!(moves, vec![pos(2, 4), pos(3, 5), pos(4, 2), pos(5, 3)]);

        let best = result.root_values.iter().map(|&(_, value)| value).max().unwrap();
        assert_eq!(result.value, best);
        let first = result.root_values.iter().find(|&&(_, value)| value == best).unwrap();
        assert_eq!(result.best_move, first.0);
    }

    #[test]
    fn takes_the_corner() {
        let board: Board = "
            -XO-----
            --------
            --------
            OXXXX---
            --------
            --------
            --------
            --------"
            .parse()
            .unwrap();
        assert_eq!(search(board, 2).map(|r| r.best_move), Some(pos(0, 0)));
    }

    #[test]
    fn blocked_side_is_scored_statically() {
        // Black has no reply after White's only move, so deeper search changes nothing.
        let board: Board = format!("{}-XO", "O".repeat(61)).parse().unwrap();
        let after = board.apply_move(pos(7, 5), Player::White);
        assert!(!after.has_legal_move(Player::Black));
        for depth in 1..5 {
            assert_eq!(search(board, depth).unwrap().value, eval::evaluate(after));
        }
    }

    #[test]
    fn pruning_matches_plain_minimax_from_the_opening() {
        let board = Board::new();
        for depth in 0..4 {
            assert_eq!(value(board, depth, true), value_unpruned(board, depth, true));
            assert_eq!(value(board, depth, false), value_unpruned(board, depth, false));
        }
    }
}
