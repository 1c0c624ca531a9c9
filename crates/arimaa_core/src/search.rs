//! Minimax search with alpha-beta pruning.
//!
//! Gold maximizes and Silver minimizes the Gold-positive evaluation. Each ply
//! is a single action by the side to move, after which the other side
//! replies, so trap captures are resolved on every child board. Children are
//! private copies; the caller's board is never touched.

use std::cmp::Reverse;
use tracing::debug;

use crate::{
    board::{Board, TRAPS},
    eval::{evaluate_with, EvalWeights},
    game::goal_or_elimination,
    movegen::{generate_into, generate_within},
    time_control::{SearchLimits, TimeControl},
    types::*,
};

/// Magnitude of a decided board's score. Nearer wins score slightly higher.
pub const WIN_SCORE: f64 = 100_000.0;

/// Result of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Best action and its backed-up score, None if no action exists
    pub best: Option<(Action, f64)>,
    /// Number of child boards visited
    pub nodes: u64,
    /// True if the deadline or stop flag cut the search short
    pub stopped: bool,
}

/// Best action for `side` at fixed `depth` with default weights and a full
/// step budget. Returns None when `side` has no legal action.
pub fn find_best_action(board: &Board, side: Side, depth: u8) -> Option<Action> {
    search(
        board,
        side,
        STEPS_PER_TURN,
        &SearchLimits::depth(depth),
        &EvalWeights::default(),
    )
    .best
    .map(|(action, _)| action)
}

/// Searches the root actions that fit in `steps_remaining`.
///
/// Ties keep the first action in search order. When the search is stopped
/// before any root action is scored, the first action is returned with its
/// static score so the caller always has a move.
pub fn search(
    board: &Board,
    side: Side,
    steps_remaining: u8,
    limits: &SearchLimits,
    weights: &EvalWeights,
) -> SearchReport {
    let mut searcher = Searcher::new(weights, &limits.time_control, limits.order_moves);

    let mut moves = generate_within(board, side, steps_remaining);
    if moves.is_empty() {
        return SearchReport {
            best: None,
            nodes: 0,
            stopped: false,
        };
    }
    if limits.order_moves {
        order_moves(board, side, &mut moves);
    }

    let depth = limits.depth.saturating_sub(1);
    let maximizing = side == Side::Gold;
    let mut alpha = f64::NEG_INFINITY;
    let mut beta = f64::INFINITY;
    let mut best: Option<(Action, f64)> = None;

    for &mv in &moves {
        if searcher.poll() {
            break;
        }
        let child = child_board(board, mv);
        searcher.nodes += 1;

        let score = searcher.minimax(&child, side.other(), depth, alpha, beta);
        if searcher.stopped {
            break;
        }

        let improves = match best {
            None => true,
            Some((_, b)) if maximizing => score > b,
            Some((_, b)) => score < b,
        };
        if improves {
            best = Some((mv, score));
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    if best.is_none() {
        let mv = moves[0];
        best = Some((mv, evaluate_with(&child_board(board, mv), weights)));
    }

    if let Some((mv, score)) = best {
        debug!(
            %side,
            action = %mv,
            score,
            nodes = searcher.nodes,
            stopped = searcher.stopped,
            "search finished"
        );
    }

    SearchReport {
        best,
        nodes: searcher.nodes,
        stopped: searcher.stopped,
    }
}

/// Backed-up score of ending the turn now: traps resolve and the opponent
/// searches `depth - 1` plies. Used to decide whether another action in the
/// same turn is worth taking. A stopped search falls back to the static
/// score of the resolved board.
pub fn pass_score(board: &Board, side: Side, limits: &SearchLimits, weights: &EvalWeights) -> f64 {
    let mut searcher = Searcher::new(weights, &limits.time_control, limits.order_moves);
    let mut after = board.clone();
    after.resolve_traps();
    let score = searcher.minimax(
        &after,
        side.other(),
        limits.depth.saturating_sub(1),
        f64::NEG_INFINITY,
        f64::INFINITY,
    );
    if searcher.stopped {
        return evaluate_with(&after, weights);
    }
    score
}

/// Stable reorder putting trap captures first and self-inflicted trap losses
/// last. Equal keys keep generator order.
pub fn order_moves(board: &Board, side: Side, moves: &mut [Action]) {
    moves.sort_by_cached_key(|&mv| Reverse(capture_gain(board, side, mv)));
}

/// Strength-weighted balance of unsupported pieces on traps after `mv`,
/// positive when the enemy is the one exposed.
fn capture_gain(board: &Board, side: Side, mv: Action) -> i32 {
    let after = board.apply(mv);
    let mut gain = 0;
    for t in TRAPS {
        if let Some(pc) = after.piece_at(t)
            && !after.has_support(t)
        {
            let value = pc.strength() as i32;
            gain += if pc.side == side { -value } else { value };
        }
    }
    gain
}

fn child_board(board: &Board, mv: Action) -> Board {
    let mut child = board.apply(mv);
    child.resolve_traps();
    child
}

struct Searcher<'a> {
    weights: &'a EvalWeights,
    tc: &'a TimeControl,
    order: bool,
    nodes: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    fn new(weights: &'a EvalWeights, tc: &'a TimeControl, order: bool) -> Self {
        Self {
            weights,
            tc,
            order,
            nodes: 0,
            stopped: false,
        }
    }

    /// Checks the stop flag, and the clock every few nodes.
    fn poll(&mut self) -> bool {
        if self.tc.is_stopped() || (self.tc.should_check_time(self.nodes) && self.tc.check_time())
        {
            self.stopped = true;
        }
        self.stopped
    }

    fn minimax(&mut self, board: &Board, side: Side, depth: u8, mut alpha: f64, mut beta: f64) -> f64 {
        if let Some(outcome) = goal_or_elimination(board, side.other()) {
            return outcome.winner.sign() * (WIN_SCORE + depth as f64);
        }
        if depth == 0 {
            return evaluate_with(board, self.weights);
        }

        let mut moves = Vec::with_capacity(32);
        generate_into(board, side, &mut moves);
        if moves.is_empty() {
            return evaluate_with(board, self.weights);
        }
        if self.order {
            order_moves(board, side, &mut moves);
        }

        let maximizing = side == Side::Gold;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            if self.poll() {
                return best;
            }
            let child = child_board(board, mv);
            self.nodes += 1;

            let score = self.minimax(&child, side.other(), depth - 1, alpha, beta);
            if self.stopped {
                return best;
            }

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break; // Cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
