//! EAT/BITE evaluation between an answer and a guess.

use serde::{Deserialize, Serialize};

use crate::domain::digits::SecretNumber;
use crate::domain::rules::SECRET_LEN;

/// Result of scoring one guess: digits correct in value and position (eat)
/// and digits correct in value but not position (bite).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    pub eat: u8,
    pub bite: u8,
}

impl ScoreResult {
    pub fn new(eat: u8, bite: u8) -> Self {
        Self { eat, bite }
    }

    /// A perfect match is eat=3, bite=0; never the reverse.
    pub fn is_win(&self) -> bool {
        self.eat as usize == SECRET_LEN
    }
}

/// Score `guess` against `answer`.
///
/// BITE uses the multiset-intersection form: for each distinct digit of the
/// guess, count `min(occurrences in answer, occurrences in guess)`, then
/// subtract the exact-position matches. For digit-distinct inputs this
/// agrees with the naive "present at another position" count; unlike it,
/// the multiset form does not overcount if inputs with repeats ever reach
/// the engine.
///
/// Pure and deterministic; no side effects.
pub fn score(answer: SecretNumber, guess: SecretNumber) -> ScoreResult {
    let a = answer.digits();
    let g = guess.digits();

    let eat = a.iter().zip(g.iter()).filter(|(x, y)| x == y).count() as u8;

    let mut matched = 0u8;
    let mut counted = [false; 10];
    for &d in &g {
        if counted[d as usize] {
            continue;
        }
        counted[d as usize] = true;
        let in_answer = a.iter().filter(|&&x| x == d).count();
        let in_guess = g.iter().filter(|&&x| x == d).count();
        matched += in_answer.min(in_guess) as u8;
    }

    ScoreResult {
        eat,
        bite: matched - eat,
    }
}
