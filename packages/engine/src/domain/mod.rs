//! Domain layer: pure game logic types and helpers.

pub mod digits;
pub mod items;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod seeds;
pub mod snapshot;
pub mod state;
pub mod turns;

#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use digits::{Guess, SecretNumber};
pub use items::{
    resolve_item, DigitClass, EffectResult, Item, ItemCategory, ItemEffect, ItemName, ItemRequest,
};
pub use player::{CallHistoryEntry, MemoState, Player};
pub use scoring::{score, ScoreResult};
pub use snapshot::{GameSnapshot, ItemPublic, PhaseSnapshot, PlayerPublic};
pub use state::{Game, GameMode, Phase, PlayerSlot};
pub use turns::{
    concede, drive_ai, set_secret, submit_guess, use_item, AiTurnEvent, GuessOutcome,
};
