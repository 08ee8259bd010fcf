//! Item catalog and effect resolution.
//!
//! Each of the six items is single-use per game. Resolution here is a pure
//! computation over the two secrets (plus the RNG for the randomized
//! effects); marking items spent and applying side effects to player state
//! is the turn layer's job so that a rejected invocation mutates nothing.

use std::fmt;
use std::str::FromStr;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::digits::SecretNumber;
use crate::domain::rules::{is_high, DIGITS, DOUBLE_EXTRA_CALLS, ITEMS_PER_PLAYER, SECRET_LEN};
use crate::errors::domain::{DomainError, ItemKind};

/// The fixed six-item vocabulary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemName {
    Double,
    HighLow,
    Target,
    Slash,
    Shuffle,
    Change,
}

impl ItemName {
    pub const ALL: [ItemName; ITEMS_PER_PLAYER] = [
        ItemName::Double,
        ItemName::HighLow,
        ItemName::Target,
        ItemName::Slash,
        ItemName::Shuffle,
        ItemName::Change,
    ];

    /// Wire token for this item.
    pub fn token(&self) -> &'static str {
        match self {
            ItemName::Double => "DOUBLE",
            ItemName::HighLow => "HIGH_LOW",
            ItemName::Target => "TARGET",
            ItemName::Slash => "SLASH",
            ItemName::Shuffle => "SHUFFLE",
            ItemName::Change => "CHANGE",
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            ItemName::Double | ItemName::HighLow | ItemName::Target | ItemName::Slash => {
                ItemCategory::Attack
            }
            ItemName::Shuffle | ItemName::Change => ItemCategory::Defense,
        }
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    Attack,
    Defense,
}

/// An item action request off the wire: one of the six inventory items, or
/// the GIVEUP concession token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ItemRequest {
    Item(ItemName),
    GiveUp,
}

impl FromStr for ItemRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GIVEUP" => Ok(ItemRequest::GiveUp),
            _ => ItemName::ALL
                .iter()
                .find(|n| n.token() == s)
                .map(|&n| ItemRequest::Item(n))
                .ok_or_else(|| {
                    DomainError::item(
                        ItemKind::UnknownItem(s.to_string()),
                        format!("unknown item token {s:?}"),
                    )
                }),
        }
    }
}

/// One inventory slot. Spent permanently on first successful invocation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: ItemName,
    pub used: bool,
}

impl Item {
    pub fn new(name: ItemName) -> Self {
        Self { name, used: false }
    }

    pub fn category(&self) -> ItemCategory {
        self.name.category()
    }

    /// Fresh inventory: all six items, unused.
    pub fn full_set() -> [Item; ITEMS_PER_PLAYER] {
        ItemName::ALL.map(Item::new)
    }
}

/// HIGH/LOW classification of a single digit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigitClass {
    High,
    Low,
}

impl DigitClass {
    pub fn of(digit: u8) -> Self {
        if is_high(digit) {
            DigitClass::High
        } else {
            DigitClass::Low
        }
    }
}

/// Structured payload of one resolved item effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum ItemEffect {
    /// DOUBLE: extra calls granted; one position of the acting player's own
    /// number is revealed to the opponent.
    DoubleReveal {
        position: usize,
        digit: u8,
        calls_granted: u8,
    },
    /// HIGH_LOW: per-position classification of the opponent's number.
    HighLow { classes: [DigitClass; SECRET_LEN] },
    /// TARGET: whether (and where) the chosen digit occurs in the
    /// opponent's number. Empty positions means a miss.
    Target { digit: u8, positions: Vec<usize> },
    /// SLASH: max digit minus min digit of the opponent's number.
    Slash { difference: u8 },
    /// SHUFFLE: the acting player's own number, permuted.
    Shuffle {
        new_number: SecretNumber,
        reordered: bool,
    },
    /// CHANGE: one digit of the acting player's own number replaced.
    Change {
        position: usize,
        old_digit: u8,
        new_digit: u8,
        new_number: SecretNumber,
    },
    /// CHANGE could not find a legal replacement; nothing changed.
    ChangeUnavailable,
    /// GIVEUP: the acting player conceded, revealing their own number.
    Concession { revealed: SecretNumber },
}

/// Outcome of one item invocation: a human-readable description plus the
/// structured effect, and whether the game ended as a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResult {
    pub description: String,
    pub effect: ItemEffect,
    pub game_ended: bool,
}

impl EffectResult {
    fn ongoing(description: String, effect: ItemEffect) -> Self {
        Self {
            description,
            effect,
            game_ended: false,
        }
    }
}

/// Resolve one of the six inventory items.
///
/// `own` is the acting player's secret, `opponent` the other player's.
/// `target_digit` is required for TARGET when the caller chooses the digit;
/// a self-driving player supplies its own randomly chosen digit instead.
pub fn resolve_item(
    name: ItemName,
    own: SecretNumber,
    opponent: SecretNumber,
    target_digit: Option<u8>,
    rng: &mut impl Rng,
) -> Result<EffectResult, DomainError> {
    match name {
        ItemName::Double => {
            let position = rng.random_range(0..SECRET_LEN);
            let digit = own.digit(position);
            Ok(EffectResult::ongoing(
                format!(
                    "DOUBLE: {DOUBLE_EXTRA_CALLS} extra calls this turn; \
                     position {} of your number ({digit}) was revealed to the opponent",
                    position + 1
                ),
                ItemEffect::DoubleReveal {
                    position,
                    digit,
                    calls_granted: DOUBLE_EXTRA_CALLS,
                },
            ))
        }
        ItemName::HighLow => {
            let classes = opponent.digits().map(DigitClass::of);
            let parts: Vec<String> = classes
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    format!(
                        "position {} {}",
                        i + 1,
                        match c {
                            DigitClass::High => "HIGH",
                            DigitClass::Low => "LOW",
                        }
                    )
                })
                .collect();
            Ok(EffectResult::ongoing(
                format!("HIGH_LOW: {}", parts.join(", ")),
                ItemEffect::HighLow { classes },
            ))
        }
        ItemName::Target => {
            let digit = target_digit.ok_or_else(|| {
                DomainError::item(ItemKind::NoTargetDigit, "TARGET requires a digit")
            })?;
            if digit >= DIGITS {
                return Err(DomainError::item(
                    ItemKind::NoTargetDigit,
                    format!("target digit must be 0-9, got {digit}"),
                ));
            }
            let positions: Vec<usize> = opponent.position_of(digit).into_iter().collect();
            let description = match positions.first() {
                Some(p) => format!("TARGET: digit {digit} is at position {}", p + 1),
                None => format!("TARGET: digit {digit} is not in the opponent's number"),
            };
            Ok(EffectResult::ongoing(
                description,
                ItemEffect::Target { digit, positions },
            ))
        }
        ItemName::Slash => {
            let digits = opponent.digits();
            // Triples are never empty, so max/min always exist.
            let max = digits.iter().copied().max().unwrap_or(0);
            let min = digits.iter().copied().min().unwrap_or(0);
            let difference = max - min;
            Ok(EffectResult::ongoing(
                format!("SLASH: max - min = {difference}"),
                ItemEffect::Slash { difference },
            ))
        }
        ItemName::Shuffle => {
            let new_number = own.shuffled(rng);
            Ok(EffectResult::ongoing(
                "SHUFFLE: your number was rearranged".to_string(),
                ItemEffect::Shuffle {
                    new_number,
                    reordered: new_number != own,
                },
            ))
        }
        ItemName::Change => {
            let position = rng.random_range(0..SECRET_LEN);
            let available: Vec<u8> = (0..DIGITS).filter(|&d| !own.contains(d)).collect();
            let Some(&new_digit) = available.choose(rng) else {
                // Cannot happen with 3 of 10 digits in play, handled anyway.
                return Ok(EffectResult::ongoing(
                    "CHANGE: no replacement digit available; your number is unchanged"
                        .to_string(),
                    ItemEffect::ChangeUnavailable,
                ));
            };
            let old_digit = own.digit(position);
            match own.with_digit_replaced(position, new_digit) {
                Ok(new_number) => Ok(EffectResult::ongoing(
                    format!(
                        "CHANGE: position {} changed from {old_digit} to {new_digit}",
                        position + 1
                    ),
                    ItemEffect::Change {
                        position,
                        old_digit,
                        new_digit,
                        new_number,
                    },
                )),
                // Replacement would break distinctness: report a no-op
                // rather than corrupting the number.
                Err(_) => Ok(EffectResult::ongoing(
                    "CHANGE: replacement would repeat a digit; your number is unchanged"
                        .to_string(),
                    ItemEffect::ChangeUnavailable,
                )),
            }
        }
    }
}

/// Build the game-ending concession effect for GIVEUP.
pub fn concession(own: SecretNumber) -> EffectResult {
    EffectResult {
        description: format!("Conceded: the number was {own}"),
        effect: ItemEffect::Concession { revealed: own },
        game_ended: true,
    }
}
