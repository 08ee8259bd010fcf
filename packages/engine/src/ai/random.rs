//! Baseline brain: random valid guesses, no items, no inference.
//!
//! Useful as a conformance baseline and as the degraded fallback strategy.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, Brain, ItemPlay};
use crate::domain::digits::SecretNumber;
use crate::domain::scoring::ScoreResult;
use crate::domain::snapshot::GameSnapshot;

pub struct RandomBrain {
    /// `Brain` methods take `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomBrain {
    pub const NAME: &'static str = "random";

    /// `seed` makes the brain deterministic; `None` uses system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Brain for RandomBrain {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_item(&self, _view: &GameSnapshot) -> Result<Option<ItemPlay>, AiError> {
        Ok(None)
    }

    fn choose_guess(&self, _view: &GameSnapshot) -> Result<SecretNumber, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(SecretNumber::random(&mut *rng))
    }

    fn observe(&self, _guess: SecretNumber, _score: ScoreResult) {}
}
