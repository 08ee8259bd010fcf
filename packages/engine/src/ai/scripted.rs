//! Scripted brain: plays a fixed move list. Test-oriented.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::trait_def::{AiError, Brain, ItemPlay};
use crate::domain::digits::SecretNumber;
use crate::domain::scoring::ScoreResult;
use crate::domain::snapshot::GameSnapshot;

/// Replays a predetermined sequence of guesses, never uses items, and
/// errors once the script runs out. Exists so game flows can be exercised
/// deterministically without an RNG in the loop.
pub struct ScriptedBrain {
    moves: Mutex<VecDeque<SecretNumber>>,
}

impl ScriptedBrain {
    pub const NAME: &'static str = "scripted";

    pub fn new(moves: impl IntoIterator<Item = SecretNumber>) -> Self {
        Self {
            moves: Mutex::new(moves.into_iter().collect()),
        }
    }

    pub fn remaining_moves(&self) -> usize {
        self.moves.lock().map(|m| m.len()).unwrap_or_default()
    }
}

impl Brain for ScriptedBrain {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_item(&self, _view: &GameSnapshot) -> Result<Option<ItemPlay>, AiError> {
        Ok(None)
    }

    fn choose_guess(&self, _view: &GameSnapshot) -> Result<SecretNumber, AiError> {
        let mut moves = self
            .moves
            .lock()
            .map_err(|e| AiError::Internal(format!("script lock poisoned: {e}")))?;
        moves
            .pop_front()
            .ok_or_else(|| AiError::Internal("script exhausted".into()))
    }

    fn observe(&self, _guess: SecretNumber, _score: ScoreResult) {}
}
