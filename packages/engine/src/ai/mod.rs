//! AI player module - handles automated game decisions.
//!
//! This module provides:
//! - the [`Brain`] trait for self-driving players
//! - [`InferenceBrain`]: exact candidate-elimination strategy (the default
//!   single-player opponent)
//! - [`RandomBrain`]: random legal guesses, baseline and fallback
//! - [`ScriptedBrain`]: fixed move list for deterministic tests
//!
//! Interactive players have no brain at all: their seat is driven
//! externally through the turn functions, so "interactive" is the absence
//! of a `Brain` rather than a variant of it.

mod candidate;
mod inference;
mod random;
mod scripted;
mod trait_def;

pub use candidate::CandidateSet;
pub use inference::InferenceBrain;
pub use random::RandomBrain;
pub use scripted::ScriptedBrain;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, Brain, ItemPlay};

use crate::domain::digits::SecretNumber;

/// Create a brain from a kind string and optional config.
///
/// Supports:
/// - "inference": candidate elimination, optional `seed` in config
/// - "random": random guesses, optional `seed` in config
/// - "scripted": fixed guesses from a `moves` array of digit strings
///
/// Returns None if the kind is unrecognized.
pub fn create_brain(kind: &str, config: Option<&JsonValue>) -> Option<Box<dyn Brain>> {
    match kind {
        InferenceBrain::NAME => {
            let seed = config.and_then(|c| c.get("seed")).and_then(|s| s.as_u64());
            Some(Box::new(InferenceBrain::new(seed)))
        }
        RandomBrain::NAME => {
            let seed = config.and_then(|c| c.get("seed")).and_then(|s| s.as_u64());
            Some(Box::new(RandomBrain::new(seed)))
        }
        ScriptedBrain::NAME => {
            let moves: Vec<SecretNumber> = config
                .and_then(|c| c.get("moves"))
                .and_then(|m| m.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|v| v.as_str())
                        .filter_map(|s| SecretNumber::parse(s).ok())
                        .collect()
                })
                .unwrap_or_default();
            Some(Box::new(ScriptedBrain::new(moves)))
        }
        _ => None,
    }
}
