use corner_othello::{Board, Difficulty, Game, GameStatus, Player, Position, PositionList};
use corner_player::{
    choose_move, choose_move_with, minimax, play_computer_turn, GreedyPlayer, MinimaxPlayer,
    RandomPlayer, SearchConfig, Strategy,
};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn all_black() -> Board {
    "X".repeat(64).parse().unwrap()
}

fn white_moves(board: Board) -> PositionList {
    board.legal_moves(Player::White)
}

/// Positions reached by random play, each with White to move.
fn random_positions(seed: u64, count: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();

    while positions.len() < count {
        let mut board = Board::new();
        let mut player = Player::Black;
        let plies = (0..40).choose(&mut rng).unwrap_or(0);

        for _ in 0..plies {
            match board.legal_moves(player).choose(&mut rng) {
                Some(mv) => board = board.apply_move(mv, player),
                None if board.is_terminal() => break,
                None => {}
            }
            player = !player;
        }

        if board.has_legal_move(Player::White) {
            positions.push(board);
        }
    }

    positions
}

#[test]
fn beginner_is_random_but_legal() {
    init_tracing();
    let board = Board::new();
    let mut player = RandomPlayer::default();

    let choices: Vec<Position> = (0..40).map(|_| player.choose_move(board).unwrap()).collect();
    assert!(choices.iter().all(|&mv| white_moves(board).contains(mv)));
    assert!(choices.iter().unique().count() > 1);
}

#[test]
fn every_strategy_returns_none_without_moves() {
    let board = all_black();
    assert_eq!(RandomPlayer::default().choose_move(board), None);
    assert_eq!(GreedyPlayer.choose_move(board), None);
    assert_eq!(MinimaxPlayer::default().choose_move(board), None);
    for &difficulty in Difficulty::ALL.iter() {
        assert_eq!(choose_move(board, difficulty), None);
    }
}

#[test]
fn every_strategy_moves_legally() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(3);
    let config = SearchConfig::with_depth(3);

    for board in random_positions(17, 30) {
        let legal = white_moves(board);
        for &difficulty in Difficulty::ALL.iter() {
            let choice = choose_move_with(board, difficulty, &config, &mut rng);
            assert!(legal.contains(choice.unwrap()), "{:?}\n{}", difficulty, board);
        }
    }
}

#[test]
fn advanced_stays_legal_at_default_depth() {
    for board in random_positions(5, 4) {
        let choice = choose_move(board, Difficulty::Advanced).unwrap();
        assert!(white_moves(board).contains(choice));
    }
}

#[test]
fn pruning_never_changes_the_choice() {
    for board in random_positions(29, 25) {
        for depth in 1..4 {
            let pruned = minimax::search(board, depth).unwrap();
            assert_eq!(
                Some((pruned.best_move, pruned.value)),
                minimax::search_unpruned(board, depth),
                "depth {}\n{}",
                depth,
                board
            );
        }
    }
}

#[test]
fn pruning_matches_inner_node_values() {
    for board in random_positions(41, 15) {
        for depth in 0..4 {
            for &maximizing in [true, false].iter() {
                assert_eq!(
                    minimax::value(board, depth, maximizing),
                    minimax::value_unpruned(board, depth, maximizing)
                );
            }
        }
    }
}

#[test]
fn unknown_difficulty_plays_like_beginner() {
    let difficulty = Difficulty::from_name_lossy("grandmaster");
    assert_eq!(difficulty, Difficulty::Beginner);

    let board = Board::new();
    let choice = choose_move(board, difficulty).unwrap();
    assert!(white_moves(board).contains(choice));
}

#[test]
fn computer_only_moves_on_its_turn() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = SearchConfig::default();

    let mut game = Game::new();
    assert_eq!(play_computer_turn(&mut game, &config, &mut rng), None);
    assert_eq!(game, Game::new());

    game.submit_move(Position::from_coords(2, 3).unwrap(), Player::Black).unwrap();
    let played = play_computer_turn(&mut game, &config, &mut rng).unwrap();
    assert_eq!(game.board().get(played), corner_othello::CellState::White);
    assert_eq!(game.current_player(), Player::Black);
}

#[test]
fn full_games_against_each_difficulty() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(99);
    let config = SearchConfig::with_depth(2);

    for &difficulty in Difficulty::ALL.iter() {
        let mut game = Game::new();
        game.set_difficulty(difficulty);

        while game.status() == GameStatus::Playing {
            if game.is_computer_turn() {
                assert!(play_computer_turn(&mut game, &config, &mut rng).is_some());
            } else {
                let mv = game.legal_moves().choose(&mut rng).unwrap();
                game.submit_move(mv, Player::Black).unwrap();
            }
        }

        assert!(game.board().is_terminal());
        assert_eq!(game.difficulty(), difficulty);
        assert!(game.winner().is_some());
    }
}
