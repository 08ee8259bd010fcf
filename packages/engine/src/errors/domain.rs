//! Domain-level error type used across the engine boundary.
//!
//! This error type is HTTP- and session-agnostic. The surrounding web or
//! session layer is expected to map `DomainError` onto its own response
//! format; nothing in here is fatal to the process, and every public engine
//! operation either fully applies or returns one of these with no partial
//! mutation.

use thiserror::Error;

/// Input validation failures for secrets and guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Not exactly three decimal digit characters.
    InvalidLength,
    /// The three digits are not pairwise distinct.
    DuplicateDigit,
}

/// Item invocation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemKind {
    /// The item was already spent earlier in this game.
    AlreadyUsed,
    /// A different item was already invoked this turn.
    UsedThisTurn,
    /// Token outside the fixed item vocabulary.
    UnknownItem(String),
    /// TARGET invoked without a digit, or with one outside 0-9.
    NoTargetDigit,
}

/// Game lifecycle and turn-order failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    /// The game already has a winner or a concession.
    GameFinished,
    /// The acting player is not the active player.
    OutOfTurn,
    /// Both secrets must be set before play starts.
    AwaitingSetup,
    /// A secret can only be set once, and only during setup.
    SecretAlreadySet,
}

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed secret or guess input.
    #[error("validation {kind:?}: {detail}")]
    Validation { kind: ValidationKind, detail: String },
    /// Rejected item invocation.
    #[error("item {kind:?}: {detail}")]
    Item { kind: ItemKind, detail: String },
    /// Operation not legal in the current game state.
    #[error("state {kind:?}: {detail}")]
    State { kind: StateKind, detail: String },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn item(kind: ItemKind, detail: impl Into<String>) -> Self {
        Self::Item {
            kind,
            detail: detail.into(),
        }
    }

    pub fn state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::State {
            kind,
            detail: detail.into(),
        }
    }
}
