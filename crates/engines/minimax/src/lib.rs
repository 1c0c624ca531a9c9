//! Minimax Arimaa Engine
//!
//! Alpha-beta search over single actions with the weighted static
//! evaluation. This is the baseline engine for comparisons.

use arimaa_core::{
    search::{pass_score, search},
    Board, Engine, EvalWeights, SearchLimits, SearchResult, Side,
};
use tracing::debug;


/// Arimaa engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Alpha-beta over one action per ply, sides alternating
/// - Material, rabbit advancement, trap and mobility evaluation
/// - Optional capture-first move ordering
/// - Time control support for per-action time limits
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    weights: EvalWeights,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: EvalWeights) -> Self {
        Self { weights, nodes: 0 }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }
}

impl Engine for MinimaxEngine {
    fn search(
        &mut self,
        board: &Board,
        side: Side,
        steps_remaining: u8,
        limits: SearchLimits,
    ) -> SearchResult {
        limits.start();

        let report = search(board, side, steps_remaining, &limits, &self.weights);
        self.nodes = report.nodes;

        let Some((action, score)) = report.best else {
            return SearchResult {
                best_action: None,
                score: 0.0,
                depth: limits.depth,
                nodes: self.nodes,
                stopped: report.stopped,
                improves: false,
            };
        };

        // Worth playing only if it beats stopping the turn here
        let improves = report.stopped
            || side.sign() * score > side.sign() * pass_score(board, side, &limits, &self.weights);
        debug!(%side, %action, score, improves, "minimax action");

        SearchResult {
            best_action: Some(action),
            score,
            depth: limits.depth,
            nodes: self.nodes,
            stopped: report.stopped,
            improves,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
