//! Static evaluation. Scores are always from Gold's point of view:
//! positive favours Gold, negative favours Silver.

use serde::{Deserialize, Serialize};

use crate::{
    board::{is_trap, Board},
    movegen::generate,
    types::*,
};

/// Tunable weights of the evaluation terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Material value per species, indexed by `Species::idx()`.
    /// Order: Rabbit, Cat, Dog, Horse, Camel, Elephant
    pub material: [f64; 6],
    /// Bonus per row a rabbit has advanced from its home row.
    pub rabbit_advance: f64,
    /// Cost of a piece standing on a trap without an adjacent ally.
    pub trap_penalty: f64,
    /// Weight of the difference in available action counts.
    pub mobility: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: [10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
            rabbit_advance: 1.0,
            trap_penalty: 15.0,
            mobility: 0.2,
        }
    }
}

/// Evaluates the board with the default weights.
pub fn evaluate(board: &Board) -> f64 {
    evaluate_with(board, &EvalWeights::default())
}

/// Sum of material, rabbit advancement, trap exposure and mobility.
pub fn evaluate_with(board: &Board, w: &EvalWeights) -> f64 {
    let mut score = 0.0;

    for (pos, pc) in board.pieces() {
        let sign = pc.side.sign();

        // An unsupported piece on a trap is as good as gone
        if is_trap(pos) && !board.has_support(pos) {
            score -= sign * w.trap_penalty;
        } else {
            score += sign * w.material[pc.species.idx()];
        }

        if pc.is_rabbit() {
            let remaining = (pc.side.goal_row() - pos.row).abs();
            let advanced = (BOARD_SIZE - 1 - remaining) as f64;
            score += sign * w.rabbit_advance * advanced;
        }
    }

    let gold_moves = generate(board, Side::Gold).len() as f64;
    let silver_moves = generate(board, Side::Silver).len() as f64;
    score += w.mobility * (gold_moves - silver_moves);

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
