//! Tournament Runner for Arimaa engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines through the rules engine
//! - Recording every game and saving match results as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and the random engine
//! cargo run -p tournament -- match minimax random --games 10 --depth 2
//!
//! # Print a saved report
//! cargo run -p tournament -- report results.json
//! ```

mod engines;
mod match_runner;
mod results;

pub use engines::*;
pub use match_runner::*;
pub use results::*;
