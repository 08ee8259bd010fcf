#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Numeron game engine: secret generation, EAT/BITE scoring, item effects,
//! turn orchestration, and the candidate-elimination AI.
//!
//! The engine is the whole of this crate. Web handlers, templates, session
//! plumbing, and stats storage are external collaborators: they construct a
//! [`Game`], call the turn functions with plain data, and render what comes
//! back.

pub mod ai;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use ai::{create_brain, AiError, Brain, CandidateSet, InferenceBrain, ItemPlay};
pub use domain::digits::{Guess, SecretNumber};
pub use domain::items::{EffectResult, ItemCategory, ItemEffect, ItemName};
pub use domain::scoring::{score, ScoreResult};
pub use domain::snapshot::{GameSnapshot, PhaseSnapshot, PlayerPublic};
pub use domain::state::{Game, GameMode, Phase, PlayerSlot};
pub use domain::turns::{
    concede, drive_ai, set_secret, submit_guess, use_item, AiTurnEvent, GuessOutcome,
};
pub use errors::domain::{DomainError, ItemKind, StateKind, ValidationKind};


// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
