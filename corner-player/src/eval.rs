//! Static evaluation of a board from White's point of view.

use corner_othello::{Board, Player, PositionList, EDGE_LENGTH};

/// Positional weight of each space, in row-major order.
/// Corners are prized and the spaces that give them away are penalized.
pub const WEIGHTS: [[i32; EDGE_LENGTH]; EDGE_LENGTH] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Sum of [`WEIGHTS`] over White's discs minus the sum over Black's.
pub fn positional(board: Board) -> i32 {
    weight_of(board, Player::White) - weight_of(board, Player::Black)
}

fn weight_of(board: Board, player: Player) -> i32 {
    PositionList::from(board.pieces(player))
        .map(|pos| WEIGHTS[pos.row()][pos.col()])
        .sum()
}

/// Disc difference plus positional weights; higher is better for White.
pub fn evaluate(board: Board) -> i32 {
    board.score().difference() + positional(board)
}
