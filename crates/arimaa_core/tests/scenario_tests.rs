//! End-to-end scenarios through the public API and the text notation.

use arimaa_core::{
    find_best_action, perft, perft_divide, Action, Board, Game, IllegalMove, Piece, Pos,
    RuleError, Side, Species, VictoryReason,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn act(s: &str) -> Action {
    s.parse().unwrap()
}

#[test]
fn test_opening_step() {
    let mut game = Game::new();
    game.apply_action(act("step a2 a3")).unwrap();
    assert_eq!(game.steps_taken(), 1);
    assert_eq!(
        game.piece_at(Pos::new(2, 0)),
        Ok(Some(Piece::new(Side::Gold, Species::Cat)))
    );
    assert_eq!(game.piece_at(Pos::new(1, 0)), Ok(None));
}

#[test]
fn test_silver_moving_on_gold_turn() {
    let mut game = Game::new();
    assert_eq!(
        game.apply_action(act("step a7 a6")),
        Err(RuleError::IllegalMove(IllegalMove::WrongSide(Pos::new(6, 0))))
    );
}

#[test]
fn test_elephant_push() {
    let mut game = Game::from_board(board("7r/8/8/8/3c4/3E4/8/R7"), Side::Gold);
    game.apply_action(act("push d3 d4 d5")).unwrap();
    assert_eq!(game.steps_taken(), 2);
    assert_eq!(
        game.piece_at(Pos::new(3, 3)),
        Ok(Some(Piece::new(Side::Gold, Species::Elephant)))
    );
    assert_eq!(
        game.piece_at(Pos::new(4, 3)),
        Ok(Some(Piece::new(Side::Silver, Species::Cat)))
    );
}

#[test]
fn test_lone_rabbit_trapped_at_turn_end() {
    // Gold rabbit walks onto f6 alone
    let mut game = Game::from_board(board("7r/8/8/5R2/8/8/8/R7"), Side::Gold);
    game.apply_action(act("step f5 f6")).unwrap();
    assert!(game.piece_at(Pos::new(5, 5)).unwrap().is_some());

    game.end_turn().unwrap();
    assert_eq!(game.piece_at(Pos::new(5, 5)), Ok(None));
    assert_eq!(game.current_player(), Side::Silver);
}

#[test]
fn test_goal_wins() {
    let mut game = Game::from_board(board("7r/R7/8/8/8/8/8/8"), Side::Gold);
    game.apply_action(act("step a7 a8")).unwrap();
    let outcome = game.end_turn().unwrap().unwrap();
    assert_eq!(outcome.winner, Side::Gold);
    assert_eq!(outcome.reason, VictoryReason::GoalReached);
}

#[test]
fn test_search_finds_trap_capture() {
    let b = board("7r/8/8/5c2/5E2/8/8/R7");
    assert_eq!(find_best_action(&b, Side::Gold, 2), Some(act("push f4 f5 f6")));
}

#[test]
fn test_perft_startpos() {
    let b = Board::startpos();
    assert_eq!(perft(&b, Side::Gold, 0), 1);
    assert_eq!(perft(&b, Side::Gold, 1), 8);
    assert_eq!(perft(&b, Side::Gold, 2), 64);

    let divide = perft_divide(&b, Side::Gold, 3);
    assert_eq!(divide.len(), 8);
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&b, Side::Gold, 3));
}
