//! Match runner for playing games between engines

use arimaa_core::{Engine, Game, SearchSettings, Side};
use tracing::{info, warn};

use crate::results::{GameRecord, GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Depth, time and ordering used for every search
    pub search: SearchSettings,
    /// Maximum turns per game before declaring a draw
    pub max_turns: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log every finished game
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            search: SearchSettings::default(),
            max_turns: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_gold = !self.config.alternate_colors || game_num % 2 == 0;

            let (record, engine1_side) = if engine1_gold {
                (self.play_game(engine1, engine2), Side::Gold)
            } else {
                (self.play_game(engine2, engine1), Side::Silver)
            };
            let game_result = record.result_for(engine1_side);

            if self.config.verbose {
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                info!(
                    "Game {}/{}: {} ({}) in {} turns",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    engine1_side,
                    record.turns
                );
            }

            result.record(game_result, record);
        }

        result
    }

    /// Play a single game from the initial board.
    ///
    /// An engine with no plan, or whose plan the rules reject, forfeits.
    pub fn play_game(&self, gold: &mut dyn Engine, silver: &mut dyn Engine) -> GameRecord {
        let mut game = Game::new();
        gold.new_game();
        silver.new_game();

        while !game.is_game_over() && game.history().len() < self.config.max_turns as usize {
            let side = game.current_player();
            let engine: &mut dyn Engine = match side {
                Side::Gold => &mut *gold,
                Side::Silver => &mut *silver,
            };

            // Fresh limits for each turn (resets the clock)
            let limits = self.config.search.to_limits();
            let plan = engine.plan_turn(game.board(), side, game.steps_remaining(), &limits);
            if plan.is_empty() {
                warn!(engine = engine.name(), %side, "no action planned, forfeiting");
                forfeit(&mut game);
                break;
            }

            for action in plan {
                if let Err(e) = game.apply_action(action) {
                    warn!(engine = engine.name(), %side, %action, error = %e, "illegal plan, forfeiting");
                    forfeit(&mut game);
                    break;
                }
            }

            // Plans shorter than the budget end the turn here
            if !game.is_game_over() && game.current_player() == side && game.steps_taken() > 0 {
                if let Err(e) = game.end_turn() {
                    warn!(error = %e, "could not end turn");
                    break;
                }
            }
        }

        GameRecord::new(gold.name(), silver.name(), game.outcome(), game.history().len())
    }
}

fn forfeit(game: &mut Game) {
    if let Err(e) = game.resign() {
        warn!(error = %e, "forfeit after game end");
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        search: SearchSettings {
            depth,
            ..Default::default()
        },
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
