//! Engine lookup by name

use arimaa_core::{Engine, EvalWeights};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineSpecError {
    #[error("unknown engine: {0} (expected minimax, random or random:SEED)")]
    Unknown(String),
    #[error("bad seed in engine spec: {0}")]
    BadSeed(String),
}

/// Builds an engine from `minimax`, `random` or `random:SEED`.
pub fn create_engine(spec: &str, weights: &EvalWeights) -> Result<Box<dyn Engine>, EngineSpecError> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };

    match (kind.to_lowercase().as_str(), arg) {
        ("minimax" | "mm", None) => Ok(Box::new(MinimaxEngine::with_weights(weights.clone()))),
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => {
            let seed = seed
                .parse()
                .map_err(|_| EngineSpecError::BadSeed(spec.to_string()))?;
            Ok(Box::new(RandomEngine::with_seed(seed)))
        }
        _ => Err(EngineSpecError::Unknown(spec.to_string())),
    }
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;
