//! Random Action Arimaa Engine
//!
//! Selects actions uniformly at random from all legal actions.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation and the match runner

use arimaa_core::{generate_within, Board, Engine, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An engine that plays random legal actions and always spends its whole
/// step budget.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible engine for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(
        &mut self,
        board: &Board,
        side: Side,
        steps_remaining: u8,
        _limits: SearchLimits,
    ) -> SearchResult {
        let actions = generate_within(board, side, steps_remaining);
        self.nodes = 1;

        let best_action = actions.choose(&mut self.rng).copied();

        SearchResult {
            best_action,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
            improves: true,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
