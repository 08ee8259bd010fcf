//! Candidate-elimination AI: the default single-player opponent.

use std::sync::Mutex;

use rand::prelude::*;

use super::candidate::CandidateSet;
use super::trait_def::{AiError, Brain, ItemPlay};
use crate::domain::digits::SecretNumber;
use crate::domain::rules::DIGITS;
use crate::domain::scoring::ScoreResult;
use crate::domain::snapshot::GameSnapshot;

/// Probability of spending an item on any given turn. Placeholder policy;
/// no opponent-specific counter-strategy.
const ITEM_USE_PROBABILITY: f64 = 0.3;

struct InferenceState {
    rng: StdRng,
    candidates: CandidateSet,
}

/// AI that keeps the set of all secrets consistent with every EAT/BITE
/// response it has received and guesses uniformly from it.
///
/// Pruning is exact, not heuristic: a candidate survives iff it would have
/// produced the observed score for every past guess. Mutable state lives
/// behind a `Mutex` since [`Brain`] methods take `&self`.
pub struct InferenceBrain {
    state: Mutex<InferenceState>,
}

impl InferenceBrain {
    pub const NAME: &'static str = "inference";

    /// `seed` makes the brain deterministic; `None` uses system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: Mutex::new(InferenceState {
                rng,
                candidates: CandidateSet::full_universe(),
            }),
        }
    }

    /// Candidates still consistent with all observations.
    pub fn remaining_candidates(&self) -> usize {
        self.state
            .lock()
            .map(|s| s.candidates.len())
            .unwrap_or_default()
    }
}

impl Brain for InferenceBrain {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_item(&self, view: &GameSnapshot) -> Result<Option<ItemPlay>, AiError> {
        let me = &view.players[view.viewer.index()];
        if me.item_used_this_turn.is_some() {
            return Ok(None);
        }
        let unused: Vec<_> = view.players[view.viewer.index()]
            .items
            .iter()
            .filter(|i| !i.used)
            .map(|i| i.name)
            .collect();
        if unused.is_empty() {
            return Ok(None);
        }

        let mut state = self
            .state
            .lock()
            .map_err(|e| AiError::Internal(format!("state lock poisoned: {e}")))?;

        if !state.rng.random_bool(ITEM_USE_PROBABILITY) {
            return Ok(None);
        }
        let name = *unused
            .choose(&mut state.rng)
            .ok_or_else(|| AiError::Internal("failed to choose item".into()))?;
        let target_digit = if name == crate::domain::items::ItemName::Target {
            Some(state.rng.random_range(0..DIGITS))
        } else {
            None
        };
        Ok(Some(ItemPlay { name, target_digit }))
    }

    fn choose_guess(&self, view: &GameSnapshot) -> Result<SecretNumber, AiError> {
        let own = view.players[view.viewer.index()].secret;

        let mut state = self
            .state
            .lock()
            .map_err(|e| AiError::Internal(format!("state lock poisoned: {e}")))?;

        if state.candidates.is_empty() {
            // Should not happen against a consistent opponent; degrade to a
            // fresh random valid number rather than failing the turn.
            return Ok(SecretNumber::random(&mut state.rng));
        }

        let InferenceState { rng, candidates } = &mut *state;
        candidates
            .sample(rng, own)
            .ok_or_else(|| AiError::Internal("candidate sampling failed".into()))
    }

    fn observe(&self, guess: SecretNumber, score: ScoreResult) {
        if let Ok(mut state) = self.state.lock() {
            state.candidates.prune(guess, score);
            tracing::debug!(
                guess = %guess,
                remaining = state.candidates.len(),
                "candidates pruned"
            );
        }
    }
}
