use super::*;
use crate::{eval::evaluate, movegen::generate};

fn gold(species: Species) -> Piece {
    Piece::new(Side::Gold, species)
}

fn silver(species: Species) -> Piece {
    Piece::new(Side::Silver, species)
}

/// Elephant next to a lone cat that can be pushed onto the f6 trap.
fn capture_board() -> Board {
    let mut b = Board::empty();
    b.place(Pos::new(3, 5), gold(Species::Elephant));
    b.place(Pos::new(4, 5), silver(Species::Cat));
    b.place(Pos::new(0, 0), gold(Species::Rabbit));
    b.place(Pos::new(7, 7), silver(Species::Rabbit));
    b
}

/// Plain minimax without pruning, same leaf and terminal rules.
fn reference(board: &Board, side: Side, depth: u8) -> f64 {
    if let Some(outcome) = goal_or_elimination(board, side.other()) {
        return outcome.winner.sign() * (WIN_SCORE + depth as f64);
    }
    if depth == 0 {
        return evaluate(board);
    }
    let moves = generate(board, side);
    if moves.is_empty() {
        return evaluate(board);
    }
    let scores = moves.into_iter().map(|mv| {
        let mut child = board.apply(mv);
        child.resolve_traps();
        reference(&child, side.other(), depth - 1)
    });
    match side {
        Side::Gold => scores.fold(f64::NEG_INFINITY, f64::max),
        Side::Silver => scores.fold(f64::INFINITY, f64::min),
    }
}

fn reference_root(board: &Board, side: Side, depth: u8) -> Option<(Action, f64)> {
    let mut best: Option<(Action, f64)> = None;
    for mv in generate(board, side) {
        let mut child = board.apply(mv);
        child.resolve_traps();
        let score = reference(&child, side.other(), depth - 1);
        let better = match best {
            None => true,
            Some((_, b)) => match side {
                Side::Gold => score > b,
                Side::Silver => score < b,
            },
        };
        if better {
            best = Some((mv, score));
        }
    }
    best
}

fn run(board: &Board, side: Side, limits: &SearchLimits) -> SearchReport {
    search(board, side, STEPS_PER_TURN, limits, &EvalWeights::default())
}

#[test]
fn test_pushes_cat_into_trap() {
    let board = capture_board();
    let best = find_best_action(&board, Side::Gold, 2);
    assert_eq!(
        best,
        Some(Action::push(Pos::new(3, 5), Pos::new(4, 5), Pos::new(5, 5)))
    );
}

#[test]
fn test_matches_plain_minimax() {
    let cases = [
        (Board::startpos(), Side::Gold, 2),
        (Board::startpos(), Side::Silver, 2),
        (capture_board(), Side::Gold, 3),
        (capture_board(), Side::Silver, 3),
    ];
    for (board, side, depth) in cases {
        let report = run(&board, side, &SearchLimits::depth(depth));
        assert_eq!(report.best, reference_root(&board, side, depth));
        assert!(!report.stopped);
    }
}

#[test]
fn test_move_ordering_keeps_value() {
    let board = capture_board();
    let plain = run(&board, Side::Gold, &SearchLimits::depth(3));
    let ordered = run(
        &board,
        Side::Gold,
        &SearchLimits::depth(3).with_move_ordering(true),
    );
    let (_, plain_score) = plain.best.unwrap();
    let (_, ordered_score) = ordered.best.unwrap();
    assert_eq!(plain_score, ordered_score);
}

#[test]
fn test_order_moves_puts_capture_first() {
    let board = capture_board();
    let mut moves = generate(&board, Side::Gold);
    order_moves(&board, Side::Gold, &mut moves);
    assert_eq!(
        moves[0],
        Action::push(Pos::new(3, 5), Pos::new(4, 5), Pos::new(5, 5))
    );
    // Walking the elephant onto f3 without support goes last
    let pull_onto_trap = Action::pull(Pos::new(3, 5), Pos::new(4, 5), Pos::new(2, 5));
    assert_eq!(moves.last(), Some(&pull_onto_trap));
}

#[test]
fn test_takes_the_goal() {
    let mut b = Board::empty();
    b.place(Pos::new(6, 0), gold(Species::Rabbit));
    b.place(Pos::new(7, 7), silver(Species::Rabbit));
    let report = run(&b, Side::Gold, &SearchLimits::depth(1));
    let (action, score) = report.best.unwrap();
    assert_eq!(action, Action::step(Pos::new(6, 0), Pos::new(7, 0)));
    assert!(score >= WIN_SCORE);
}

#[test]
fn test_silver_minimizes() {
    let mut b = Board::empty();
    b.place(Pos::new(1, 3), silver(Species::Rabbit));
    b.place(Pos::new(7, 7), gold(Species::Rabbit));
    let report = run(&b, Side::Silver, &SearchLimits::depth(2));
    let (action, score) = report.best.unwrap();
    assert_eq!(action, Action::step(Pos::new(1, 3), Pos::new(0, 3)));
    assert!(score <= -WIN_SCORE);
}

#[test]
fn test_no_actions() {
    let mut b = Board::empty();
    b.place(Pos::new(0, 0), gold(Species::Rabbit));
    b.place(Pos::new(1, 0), silver(Species::Cat));
    b.place(Pos::new(0, 1), silver(Species::Dog));
    b.place(Pos::new(7, 7), silver(Species::Rabbit));

    assert!(generate(&b, Side::Gold).is_empty());
    let report = run(&b, Side::Gold, &SearchLimits::depth(2));
    assert_eq!(report.best, None);
    assert_eq!(report.nodes, 0);
    assert_eq!(find_best_action(&b, Side::Gold, 2), None);
}

#[test]
fn test_node_count_depth_one() {
    let report = run(&Board::startpos(), Side::Gold, &SearchLimits::depth(1));
    assert_eq!(report.nodes, 8);
}

#[test]
fn test_step_budget_limits_root() {
    let board = capture_board();
    let report = search(
        &board,
        Side::Gold,
        1,
        &SearchLimits::depth(2),
        &EvalWeights::default(),
    );
    let (action, _) = report.best.unwrap();
    assert_eq!(action.cost(), 1);
}

#[test]
fn test_stopped_search_still_returns_an_action() {
    let board = Board::startpos();
    let limits = SearchLimits::depth(4);
    limits.time_control.stop();

    let report = run(&board, Side::Gold, &limits);
    assert!(report.stopped);
    assert_eq!(report.nodes, 0);
    let (action, _) = report.best.unwrap();
    assert_eq!(action, generate(&board, Side::Gold)[0]);
}

#[test]
fn test_board_untouched() {
    let board = capture_board();
    let before = board.clone();
    let _ = run(&board, Side::Gold, &SearchLimits::depth(3));
    assert_eq!(board, before);
}

#[test]
fn test_pass_score_depth_one_is_static() {
    let mut board = capture_board();
    board.apply_unchecked(Action::push(Pos::new(3, 5), Pos::new(4, 5), Pos::new(5, 5)));
    let limits = SearchLimits::depth(1);
    let score = pass_score(&board, Side::Gold, &limits, &EvalWeights::default());

    let mut resolved = board.clone();
    resolved.resolve_traps();
    assert_eq!(resolved.piece_count(), 3);
    assert_eq!(score, evaluate(&resolved));
}

#[test]
fn test_stopped_pass_score_is_static() {
    let board = capture_board();
    let limits = SearchLimits::depth(3);
    limits.time_control.stop();

    let score = pass_score(&board, Side::Gold, &limits, &EvalWeights::default());
    assert!(score.is_finite());
    assert_eq!(score, evaluate(&board));
}
