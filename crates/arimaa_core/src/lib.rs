pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use eval::{evaluate, evaluate_with, EvalWeights};
pub use game::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use search::{find_best_action, SearchReport, WIN_SCORE};
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all Arimaa players (minimax, random, ...)
// =============================================================================

/// Result of a single-action search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best action found (None if the side has no legal action)
    pub best_action: Option<Action>,
    /// Evaluation score, positive favours Gold
    pub score: f64,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
    /// Whether playing `best_action` beats ending the turn now
    pub improves: bool,
}

/// Trait that all Arimaa engines implement.
///
/// An engine chooses one action at a time; `plan_turn` strings actions
/// together until the turn budget runs out or the engine prefers to stop.
pub trait Engine: Send {
    /// Search for the best single action of `side` that fits in
    /// `steps_remaining`.
    fn search(
        &mut self,
        board: &Board,
        side: Side,
        steps_remaining: u8,
        limits: SearchLimits,
    ) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Plans the rest of a turn on a private copy of `board`.
    ///
    /// The first action is always taken when one exists; later ones only
    /// while the engine reports an improvement. Traps are not resolved
    /// between actions since the turn has not ended yet.
    fn plan_turn(
        &mut self,
        board: &Board,
        side: Side,
        steps_remaining: u8,
        limits: &SearchLimits,
    ) -> Vec<Action> {
        let mut board = board.clone();
        let mut budget = steps_remaining;
        let mut actions = Vec::new();

        while budget > 0 {
            let result = self.search(&board, side, budget, limits.clone());
            let Some(action) = result.best_action else {
                break;
            };
            if !actions.is_empty() && !result.improves {
                break;
            }
            board.apply_unchecked(action);
            budget = budget.saturating_sub(action.cost());
            actions.push(action);
            if result.stopped {
                break;
            }
        }
        actions
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
