//! Candidate tracking for the inference strategy.

use rand::prelude::*;

use crate::domain::digits::SecretNumber;
use crate::domain::rules::DIGITS;
use crate::domain::scoring::{score, ScoreResult};

/// The set of secrets still consistent with every observation so far.
///
/// Starts as the full machine-generatable universe and shrinks
/// monotonically; it can be re-derived at any time by replaying the
/// observation history against a fresh universe.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    candidates: Vec<SecretNumber>,
}

impl CandidateSet {
    /// All distinct-digit triples with a non-zero leading digit
    /// (9 * 9 * 8 = 648 of them).
    pub fn full_universe() -> Self {
        let mut candidates = Vec::with_capacity(648);
        for i in 1..DIGITS {
            for j in 0..DIGITS {
                for k in 0..DIGITS {
                    if let Ok(n) = SecretNumber::new([i, j, k]) {
                        candidates.push(n);
                    }
                }
            }
        }
        Self { candidates }
    }

    /// Rebuild from scratch by replaying an observation history.
    pub fn replay<'a>(
        observations: impl IntoIterator<Item = &'a (SecretNumber, ScoreResult)>,
    ) -> Self {
        let mut set = Self::full_universe();
        for (guess, observed) in observations {
            set.prune(*guess, *observed);
        }
        set
    }

    /// Keep exactly the candidates that would have produced `observed` for
    /// `guess`. Never discards a still-possible candidate, always discards
    /// a provably inconsistent one.
    pub fn prune(&mut self, guess: SecretNumber, observed: ScoreResult) {
        self.candidates.retain(|&c| score(c, guess) == observed);
    }

    /// Uniformly random candidate, optionally excluding one number (the
    /// AI's own secret). Falls back to including it when it is the only
    /// candidate left.
    pub fn sample(&self, rng: &mut impl Rng, exclude: Option<SecretNumber>) -> Option<SecretNumber> {
        let filtered: Vec<SecretNumber> = self
            .candidates
            .iter()
            .copied()
            .filter(|&c| Some(c) != exclude)
            .collect();
        if filtered.is_empty() {
            return self.candidates.choose(rng).copied();
        }
        filtered.choose(rng).copied()
    }

    pub fn contains(&self, number: SecretNumber) -> bool {
        self.candidates.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SecretNumber> + '_ {
        self.candidates.iter().copied()
    }
}
