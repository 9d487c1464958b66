//! Implements game-level Othello logic.
//!
//! [`Game`] owns turn order and termination across moves. It is the only
//! place observable game state changes, and every change goes through
//! [`Game::play`], which either yields a complete next state or an error
//! leaving the current state untouched.

use crate::board::{Board, Score};
use crate::position::{Position, PositionList};
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, warn};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The side the human plays.
    pub const HUMAN: Self = Player::Black;

    /// The side the computer plays.
    pub const COMPUTER: Self = Player::White;
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// The result of comparing disc counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Finished,
}

/// Strength of the computer opponent.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Difficulty {
    #[display(fmt = "beginner")]
    Beginner,
    #[display(fmt = "intermediate")]
    Intermediate,
    #[display(fmt = "advanced")]
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Beginner
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Parse a difficulty name, falling back to [`Difficulty::Beginner`] for anything unknown.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ParseDifficultyError| {
            warn!(%err, "falling back to beginner");
            Difficulty::Beginner
        })
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "unknown difficulty {:?}", name)]
pub struct ParseDifficultyError {
    name: String,
}

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(ParseDifficultyError {
                name: s.to_string(),
            }),
        }
    }
}

/// Why a move request was turned down.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum MoveError {
    #[display(fmt = "the game is finished")]
    GameFinished,
    #[display(fmt = "it is {}'s turn, not {}'s", expected, requested)]
    OutOfTurn { expected: Player, requested: Player },
    #[display(fmt = "{} is not a legal move", position)]
    IllegalMove { position: Position },
}

/// The complete state of an Othello game against the computer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    score: Score,
    difficulty: Difficulty,
}

impl Default for Game {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Board::new(), Player::default())
    }

    /// Start from an arbitrary board with `player` to move.
    /// The status is finished if neither side can move. If only the opponent
    /// can move, the opponent starts.
    pub fn from_position(board: Board, player: Player) -> Self {
        let (status, player) = if board.is_terminal() {
            (GameStatus::Finished, player)
        } else if !board.has_legal_move(player) {
            debug!(%player, "no legal move at start, passing");
            (GameStatus::Playing, !player)
        } else {
            (GameStatus::Playing, player)
        };

        Self {
            board,
            current_player: player,
            status,
            score: board.score(),
            difficulty: Difficulty::default(),
        }
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Whether the computer should move now.
    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::Playing && self.current_player == Player::COMPUTER
    }

    /// Legal moves for the player whose turn it is.
    pub fn legal_moves(&self) -> PositionList {
        self.board.legal_moves(self.current_player)
    }

    /// Whether the player whose turn it is may move at `pos`.
    pub fn is_legal(&self, pos: Position) -> bool {
        self.board.is_legal(pos, self.current_player)
    }

    /// The result once the game is finished; None while playing.
    pub fn winner(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Finished => Some(self.board.winner()),
            GameStatus::Playing => None,
        }
    }

    /// Compute the state after `player` moves at `pos`.
    ///
    /// If the opponent then has no legal move but the game is not over, the
    /// turn stays with `player`.
    pub fn play(self, pos: Position, player: Player) -> Result<Self, MoveError> {
        if self.status == GameStatus::Finished {
            return Err(MoveError::GameFinished);
        }
        if player != self.current_player {
            return Err(MoveError::OutOfTurn {
                expected: self.current_player,
                requested: player,
            });
        }
        if !self.board.is_legal(pos, player) {
            return Err(MoveError::IllegalMove { position: pos });
        }

        let board = self.board.apply_move(pos, player);
        let opponent = !player;

        let (status, current_player) = if board.is_terminal() {
            (GameStatus::Finished, opponent)
        } else if !board.has_legal_move(opponent) {
            (GameStatus::Playing, player)
        } else {
            (GameStatus::Playing, opponent)
        };

        Ok(Self {
            board,
            current_player,
            status,
            score: board.score(),
            difficulty: self.difficulty,
        })
    }

    /// Apply a move request in place. On error the game is left unchanged.
    pub fn submit_move(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        match self.play(pos, player) {
            Ok(next) => {
                debug!(
                    %pos,
                    %player,
                    next = %next.current_player,
                    black = next.score.black,
                    white = next.score.white,
                    finished = next.is_finished(),
                    "move accepted"
                );
                *self = next;
                Ok(())
            }
            Err(err) => {
                debug!(%pos, %player, %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Start over from the opening position, keeping the difficulty.
    pub fn reset(&mut self) {
        *self = Self {
            difficulty: self.difficulty,
            ..Self::new()
        };
    }

    /// Change the computer's strength. Board and turn are unaffected.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(
            f,
            "Black {} - {} White ({})",
            self.score.black, self.score.white, self.difficulty
        )?;
        match self.winner() {
            Some(outcome) => write!(f, "Game over: {}", outcome),
            None => write!(f, "{} to move", self.current_player),
        }
    }
}
