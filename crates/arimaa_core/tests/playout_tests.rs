//! Randomized playouts checking rule invariants on every applied action.
//!
//! Each seed plays an independent game; seeds run in parallel.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use arimaa_core::{
    rabbit_retreats, Action, Board, Game, Pos, RuleError, Side, STEPS_PER_TURN,
};

const SEEDS: u64 = 48;
const MAX_TURNS: usize = 120;

fn changed_cells(a: &Board, b: &Board) -> usize {
    Pos::all().filter(|&p| a.piece_at(p) != b.piece_at(p)).count()
}

fn random_pos(rng: &mut StdRng) -> Pos {
    Pos::new(rng.gen_range(0..8), rng.gen_range(0..8))
}

fn random_action(rng: &mut StdRng) -> Action {
    match rng.gen_range(0..3) {
        0 => Action::step(random_pos(rng), random_pos(rng)),
        1 => Action::push(random_pos(rng), random_pos(rng), random_pos(rng)),
        _ => Action::pull(random_pos(rng), random_pos(rng), random_pos(rng)),
    }
}

fn check_generated(game: &Game, actions: &[Action]) {
    let board = game.board();
    for &action in actions {
        assert!(
            !board.is_frozen(action.mover()),
            "frozen mover in {action} on\n{board}"
        );
        if let Action::Step { from, to } = action
            && let Some(piece) = board.piece_at(from)
        {
            assert!(!rabbit_retreats(piece, from, to), "rabbit retreat {action}");
        }
        assert!(action.cost() <= game.steps_remaining());
        assert_eq!(game.validate(action), Ok(()), "generated {action} rejected");
    }
}

fn play(seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();

    while !game.is_game_over() && game.history().len() < MAX_TURNS {
        // Random garbage is either rejected without a trace or legal
        let probe = random_action(&mut rng);
        if game.validate(probe).is_err() {
            let before = game.clone();
            assert!(game.apply_action(probe).is_err());
            assert_eq!(game.board(), before.board());
            assert_eq!(game.steps_taken(), before.steps_taken());
            assert_eq!(game.current_player(), before.current_player());
        }

        let actions = game.legal_actions();
        check_generated(&game, &actions);

        let Some(&action) = actions.choose(&mut rng) else {
            assert!(game.steps_taken() > 0, "immobile side not detected");
            game.end_turn().unwrap();
            continue;
        };

        let before = game.board().clone();
        let side = game.current_player();
        let turns = game.history().len();
        game.apply_action(action).unwrap();

        if game.history().len() == turns {
            // Mid-turn: nothing captured, exactly the touched cells change
            assert_eq!(game.board().piece_count(), before.piece_count());
            let expected = if action.cost() == 1 { 2 } else { 3 };
            assert_eq!(changed_cells(&before, game.board()), expected);
            assert_eq!(game.current_player(), side);
        } else {
            assert_eq!(game.steps_taken(), 0);
            assert!(game.board().piece_count() <= before.piece_count());
            assert_eq!(game.history().last().map(|t| t.side), Some(side));
        }

        if game.steps_taken() > 0 && rng.gen_bool(0.25) {
            game.end_turn().unwrap();
        }
    }

    if let Some(outcome) = game.outcome() {
        assert_eq!(
            game.apply_action(Action::step(Pos::new(0, 0), Pos::new(1, 0))),
            Err(RuleError::GameOver(outcome))
        );
    }
    game.history().len()
}

#[test]
fn random_playouts_keep_invariants() {
    let turns: Vec<usize> = (0..SEEDS).into_par_iter().map(play).collect();
    assert!(turns.iter().all(|&t| t > 0));
}

#[test]
fn playouts_are_reproducible() {
    assert_eq!(play(7), play(7));
}

#[test]
fn step_then_step_back_restores_board() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let mut game = Game::new();
        // Shuffle the opening a little first
        for _ in 0..rng.gen_range(0..3) {
            let actions = game.legal_actions();
            if let Some(&a) = actions.choose(&mut rng) {
                game.apply_action(a).unwrap();
            }
        }
        if game.steps_remaining() < 2 {
            continue;
        }

        let before = game.board().clone();
        let steps: Vec<Action> = game
            .legal_actions()
            .into_iter()
            .filter(|a| a.cost() == 1)
            .collect();
        let Some(&Action::Step { from, to }) = steps.choose(&mut rng) else {
            continue;
        };
        game.apply_action(Action::step(from, to)).unwrap();
        // Rabbits cannot always walk back
        if game.validate(Action::step(to, from)).is_ok() {
            game.apply_action(Action::step(to, from)).unwrap();
            assert_eq!(game.board(), &before);
        }
    }
}

#[test]
fn full_turn_always_changes_side() {
    let mut game = Game::new();
    for _ in 0..STEPS_PER_TURN {
        let action = game.legal_actions()[0];
        game.apply_action(action).unwrap();
    }
    assert_eq!(game.current_player(), Side::Silver);
    assert_eq!(game.turn_number(), 2);
}
