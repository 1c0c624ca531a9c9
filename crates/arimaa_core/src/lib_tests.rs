use super::*;

/// Plays the first generated action, with a fixed answer for `improves`.
struct FirstAction {
    improves: bool,
    calls: usize,
}

impl Engine for FirstAction {
    fn search(
        &mut self,
        board: &Board,
        side: Side,
        steps_remaining: u8,
        limits: SearchLimits,
    ) -> SearchResult {
        self.calls += 1;
        SearchResult {
            best_action: generate_within(board, side, steps_remaining).first().copied(),
            score: 0.0,
            depth: limits.depth,
            nodes: 0,
            stopped: false,
            improves: self.improves,
        }
    }

    fn name(&self) -> &str {
        "First"
    }
}

#[test]
fn test_plan_turn_uses_whole_budget() {
    let mut engine = FirstAction {
        improves: true,
        calls: 0,
    };
    let board = Board::startpos();
    let plan = engine.plan_turn(&board, Side::Gold, STEPS_PER_TURN, &SearchLimits::default());

    assert_eq!(plan.iter().map(|a| a.cost()).sum::<u8>(), STEPS_PER_TURN);
    assert_eq!(engine.calls, 4);

    // The plan replays legally through a game
    let mut game = Game::new();
    for action in &plan {
        game.apply_action(*action).unwrap();
    }
    assert_eq!(game.current_player(), Side::Silver);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_plan_turn_stops_without_improvement() {
    let mut engine = FirstAction {
        improves: false,
        calls: 0,
    };
    let plan = engine.plan_turn(&Board::startpos(), Side::Gold, 3, &SearchLimits::default());
    assert_eq!(plan.len(), 1);
    assert_eq!(engine.calls, 2);
}

#[test]
fn test_plan_turn_without_actions() {
    let mut engine = FirstAction {
        improves: true,
        calls: 0,
    };
    let plan = engine.plan_turn(&Board::startpos(), Side::Gold, 0, &SearchLimits::default());
    assert!(plan.is_empty());
    assert_eq!(engine.calls, 0);

    let mut frozen = Board::empty();
    frozen.place(Pos::new(0, 0), Piece::new(Side::Gold, Species::Rabbit));
    frozen.place(Pos::new(1, 0), Piece::new(Side::Silver, Species::Cat));
    let plan = engine.plan_turn(&frozen, Side::Gold, STEPS_PER_TURN, &SearchLimits::default());
    assert!(plan.is_empty());
}

#[test]
fn test_author_default() {
    let engine = FirstAction {
        improves: true,
        calls: 0,
    };
    assert_eq!(engine.author(), "ML-chess");
}
