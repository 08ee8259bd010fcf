//! Per-player state: secret, item inventory, call history, memo.

use serde::{Deserialize, Serialize};

use crate::domain::digits::SecretNumber;
use crate::domain::items::{Item, ItemName};
use crate::domain::rules::{DIGITS, ITEMS_PER_PLAYER, SECRET_LEN};
use crate::domain::scoring::ScoreResult;
use crate::errors::domain::{DomainError, ItemKind};

/// One line of a player's call log. Append-only; insertion order is
/// chronological turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHistoryEntry {
    /// The guess, or None when the turn ended on an item alone.
    pub guess: Option<SecretNumber>,
    pub score: Option<ScoreResult>,
    /// Name of the item used in the same turn, if any.
    pub item_used: Option<ItemName>,
}

/// Digit memo pad: which of the digits 0-9 have appeared in any of this
/// player's guesses. Set-only for the life of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoState([bool; DIGITS as usize]);

impl MemoState {
    pub fn mark(&mut self, number: SecretNumber) {
        for d in number.digits() {
            self.0[d as usize] = true;
        }
    }

    pub fn is_marked(&self, digit: u8) -> bool {
        self.0[digit as usize]
    }

    pub fn as_array(&self) -> [bool; DIGITS as usize] {
        self.0
    }
}

/// One player's complete state, owned by the game.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    /// Hidden number; None until setup completes for this player.
    pub secret: Option<SecretNumber>,
    pub items: [Item; ITEMS_PER_PLAYER],
    pub call_history: Vec<CallHistoryEntry>,
    pub memo: MemoState,
    /// Opponent digits this player has learned through items, by position
    /// in the opponent's number (TARGET hits, the opponent's DOUBLE leak).
    pub known_digits: [Option<u8>; SECRET_LEN],
    /// Item invoked in the current turn, if any. Doubles as the
    /// at-most-one-item-per-turn flag; cleared at turn rollover.
    pub item_used_this_turn: Option<ItemName>,
    /// Forced calls still owed under DOUBLE this turn.
    pub double_calls_remaining: u8,
    /// Which position of this player's own number DOUBLE revealed.
    pub double_revealed_pos: Option<usize>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: None,
            items: Item::full_set(),
            call_history: Vec::new(),
            memo: MemoState::default(),
            known_digits: [None; SECRET_LEN],
            item_used_this_turn: None,
            double_calls_remaining: 0,
            double_revealed_pos: None,
        }
    }

    pub fn item(&self, name: ItemName) -> &Item {
        // The inventory always holds all six names exactly once.
        self.items
            .iter()
            .find(|i| i.name == name)
            .unwrap_or(&self.items[0])
    }

    /// Check the per-game and per-turn usage rules for `name` without
    /// changing anything.
    pub fn check_item_available(&self, name: ItemName) -> Result<(), DomainError> {
        if self.item_used_this_turn.is_some() {
            return Err(DomainError::item(
                ItemKind::UsedThisTurn,
                "only one item may be used per turn",
            ));
        }
        if self.item(name).used {
            return Err(DomainError::item(
                ItemKind::AlreadyUsed,
                format!("{name} was already used this game"),
            ));
        }
        Ok(())
    }

    /// Spend `name` for this game and mark it as this turn's item.
    /// Callers must have passed `check_item_available` first.
    pub fn mark_item_used(&mut self, name: ItemName) {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.used = true;
        }
        self.item_used_this_turn = Some(name);
    }

    pub fn unused_items(&self) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|i| !i.used)
            .map(|i| i.name)
            .collect()
    }

    pub fn record_call(&mut self, guess: SecretNumber, score: ScoreResult) {
        self.call_history.push(CallHistoryEntry {
            guess: Some(guess),
            score: Some(score),
            item_used: self.item_used_this_turn,
        });
        self.memo.mark(guess);
    }

    /// Clear per-turn state at turn rollover. Spent items stay spent.
    pub fn reset_turn(&mut self) {
        self.item_used_this_turn = None;
        self.double_calls_remaining = 0;
        self.double_revealed_pos = None;
    }
}
