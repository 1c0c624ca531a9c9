//! Game and match results, storage and reporting

use arimaa_core::{Outcome, Side, VictoryReason};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors saving or loading results.
#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("failed to access results file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to (de)serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a single game from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// Engine playing Gold
    pub gold: String,
    /// Engine playing Silver
    pub silver: String,
    /// None when the turn cap ended the game
    pub winner: Option<Side>,
    pub reason: Option<VictoryReason>,
    /// Completed turns
    pub turns: usize,
}

impl GameRecord {
    pub fn new(gold: &str, silver: &str, outcome: Option<Outcome>, turns: usize) -> Self {
        Self {
            gold: gold.to_string(),
            silver: silver.to_string(),
            winner: outcome.map(|o| o.winner),
            reason: outcome.map(|o| o.reason),
            turns,
        }
    }

    /// Result for the engine that played `side`.
    pub fn result_for(&self, side: Side) -> GameResult {
        match self.winner {
            Some(w) if w == side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult, game: GameRecord) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Decided games per victory reason, in first-seen order.
    pub fn reasons(&self) -> Vec<(VictoryReason, usize)> {
        let mut counts: Vec<(VictoryReason, usize)> = Vec::new();
        for reason in self.games.iter().filter_map(|g| g.reason) {
            match counts.iter_mut().find(|(r, _)| *r == reason) {
                Some((_, n)) => *n += 1,
                None => counts.push((reason, 1)),
            }
        }
        counts
    }

    pub fn average_turns(&self) -> Option<f64> {
        if self.games.is_empty() {
            return None;
        }
        let total: usize = self.games.iter().map(|g| g.turns).sum();
        Some(total as f64 / self.games.len() as f64)
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    pub max_turns: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: 3,
            max_turns: 200,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Text report: one line per match, then how its games were decided.
    pub fn generate_report(&self) -> String {
        let mut lines = vec![
            format!("=== Tournament: {} ===", self.name),
            format!("Participants: {}", self.participants.join(", ")),
            format!(
                "{} games/match, depth {}, draw after {} turns",
                self.config.games_per_match, self.config.search_depth, self.config.max_turns
            ),
            String::new(),
            format!("{:<20} {:<20} {:>4} {:>4} {:>4} {:>7}", "engine 1", "engine 2", "W", "L", "D", "score"),
        ];

        for entry in &self.matches {
            let r = &entry.result;
            lines.push(format!(
                "{:<20} {:<20} {:>4} {:>4} {:>4} {:>6.1}%",
                entry.engine1,
                entry.engine2,
                r.wins,
                r.losses,
                r.draws,
                r.score() * 100.0
            ));
            for (reason, count) in r.reasons() {
                lines.push(format!("    {count} by {reason}"));
            }
            if let Some(avg) = r.average_turns() {
                lines.push(format!("    {avg:.1} turns per game"));
            }
        }

        lines.join("\n")
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
