use corner_othello::{Board, Position};

/// A way of choosing White's move.
pub trait Strategy {
    /// A short name for logs.
    fn name(&self) -> &'static str;

    /// Choose one of White's legal moves on `board`, or None if White has none.
    fn choose_move(&mut self, board: Board) -> Option<Position>;
}
