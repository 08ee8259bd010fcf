//! Decision-making trait for self-driving players.

use std::fmt;

use crate::domain::digits::SecretNumber;
use crate::domain::items::ItemName;
use crate::domain::scoring::ScoreResult;
use crate::domain::snapshot::GameSnapshot;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced or requested an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// An item the brain wants to play this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPlay {
    pub name: ItemName,
    /// Digit for TARGET; self-driving players pick their own.
    pub target_digit: Option<u8>,
}

/// Trait for self-driving players.
///
/// Implementations receive the game as the acting player sees it (their
/// own secret, both inventories, full call history) and must choose
/// actions. Methods take `&self`; implementations keep mutable state (RNG,
/// candidate set) behind a `Mutex`.
pub trait Brain: Send + Sync {
    /// Short identifier for registries and debug output.
    fn name(&self) -> &'static str;

    /// Decide whether to spend an item this turn.
    ///
    /// The brain should only pick from its own unused items in the view;
    /// the turn layer still enforces the usage rules.
    fn choose_item(&self, view: &GameSnapshot) -> Result<Option<ItemPlay>, AiError>;

    /// Produce the next guess.
    fn choose_guess(&self, view: &GameSnapshot) -> Result<SecretNumber, AiError>;

    /// Incorporate the score of one of this brain's own completed guesses.
    fn observe(&self, guess: SecretNumber, score: ScoreResult);
}
