//! Computer opponents for `corner-othello`, always playing White.
//!
//! Three strategies of increasing strength implement [`Strategy`]:
//!
//!  - [`RandomPlayer`] picks uniformly among the legal moves.
//!  - [`GreedyPlayer`] looks one ply ahead with a corner/edge heuristic.
//!  - [`MinimaxPlayer`] runs a fixed-depth alpha-beta search over the
//!    positional evaluator in [`eval`].
//!
//! [`choose_move`] maps a [`Difficulty`] to one of them. Every strategy is a
//! pure function of the board apart from the random player's RNG.

pub mod eval;
pub mod minimax;

mod config;
mod greedy;
mod random;
mod strategy;

pub use config::SearchConfig;
pub use greedy::{score_move, GreedyPlayer};
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;
pub use strategy::Strategy;

use corner_othello::{Board, Difficulty, Game, Player, Position};
use rand::Rng;
use tracing::{debug, warn};

/// Build the strategy for `difficulty`, borrowing `rng` for the random player.
pub fn strategy_for<'a, R: Rng>(
    difficulty: Difficulty,
    config: &SearchConfig,
    rng: &'a mut R,
) -> Box<dyn Strategy + 'a> {
    match difficulty {
        Difficulty::Beginner => Box::new(RandomPlayer::new(rng)),
        Difficulty::Intermediate => Box::new(GreedyPlayer),
        Difficulty::Advanced => Box::new(MinimaxPlayer::new(*config)),
    }
}

/// Choose White's move on `board` at the given difficulty.
/// Returns None exactly when White has no legal move.
pub fn choose_move_with<R: Rng>(
    board: Board,
    difficulty: Difficulty,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Position> {
    let mut strategy = strategy_for(difficulty, config, rng);
    let choice = strategy.choose_move(board);
    let shown = choice.map(|pos| pos.to_string());
    debug!(%difficulty, strategy = strategy.name(), choice = ?shown, "computer chose");
    choice
}

/// [`choose_move_with`] using the thread RNG and the default search depth.
pub fn choose_move(board: Board, difficulty: Difficulty) -> Option<Position> {
    choose_move_with(board, difficulty, &SearchConfig::default(), &mut rand::thread_rng())
}

/// If it is the computer's turn, choose a move at the game's difficulty and play it.
/// Returns the position played, or None if the computer did not move.
pub fn play_computer_turn<R: Rng>(
    game: &mut Game,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Position> {
    if !game.is_computer_turn() {
        return None;
    }

    let pos = choose_move_with(game.board(), game.difficulty(), config, rng)?;
    match game.submit_move(pos, Player::COMPUTER) {
        Ok(()) => Some(pos),
        Err(err) => {
            warn!(%pos, %err, "computer move rejected");
            None
        }
    }
}
