//! Public snapshot API for observing game state without exposing secrets.
//!
//! A snapshot is rendered from one player's point of view: it always shows
//! that player's own secret, and the opponent's only once the game is
//! finished. Everything else in it is table-public information.

use serde::{Deserialize, Serialize};

use crate::domain::digits::SecretNumber;
use crate::domain::items::{ItemCategory, ItemName};
use crate::domain::player::{CallHistoryEntry, Player};
use crate::domain::rules::{DIGITS, ITEMS_PER_PLAYER, PLAYERS, SECRET_LEN};
use crate::domain::state::{Game, GameMode, Phase, PlayerSlot};

/// Top-level snapshot combining game facts and per-seat public state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub viewer: PlayerSlot,
    pub active: PlayerSlot,
    pub turn_count: u32,
    pub phase: PhaseSnapshot,
    pub players: [PlayerPublic; PLAYERS],
}

/// Adjacently tagged union of phase-specific facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    AwaitingSetup { secrets_set: [bool; PLAYERS] },
    InProgress,
    Finished { winner: Option<PlayerSlot> },
}

/// Public info about one item slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPublic {
    pub name: ItemName,
    pub category: ItemCategory,
    pub used: bool,
}

/// Public face of one seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub name: String,
    /// Own secret for the viewer's seat; both secrets once finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretNumber>,
    pub items: [ItemPublic; ITEMS_PER_PLAYER],
    pub call_history: Vec<CallHistoryEntry>,
    pub memo: [bool; DIGITS as usize],
    pub known_digits: [Option<u8>; SECRET_LEN],
    pub item_used_this_turn: Option<ItemName>,
    pub double_calls_remaining: u8,
    pub double_revealed_pos: Option<usize>,
}

fn player_public(player: &Player, reveal_secret: bool) -> PlayerPublic {
    PlayerPublic {
        name: player.name.clone(),
        secret: if reveal_secret { player.secret } else { None },
        items: player.items.map(|i| ItemPublic {
            name: i.name,
            category: i.category(),
            used: i.used,
        }),
        call_history: player.call_history.clone(),
        memo: player.memo.as_array(),
        known_digits: player.known_digits,
        item_used_this_turn: player.item_used_this_turn,
        double_calls_remaining: player.double_calls_remaining,
        double_revealed_pos: player.double_revealed_pos,
    }
}

impl Game {
    /// Render the game from `viewer`'s point of view.
    pub fn snapshot(&self, viewer: PlayerSlot) -> GameSnapshot {
        let finished = self.phase == Phase::Finished;
        let players = [PlayerSlot::One, PlayerSlot::Two]
            .map(|slot| player_public(self.player(slot), finished || slot == viewer));

        let phase = match self.phase {
            Phase::AwaitingSetup => PhaseSnapshot::AwaitingSetup {
                secrets_set: [
                    self.players[0].secret.is_some(),
                    self.players[1].secret.is_some(),
                ],
            },
            Phase::InProgress => PhaseSnapshot::InProgress,
            Phase::Finished => PhaseSnapshot::Finished {
                winner: self.winner,
            },
        };

        GameSnapshot {
            mode: self.mode,
            viewer,
            active: self.active,
            turn_count: self.turn_count,
            phase,
            players,
        }
    }
}
