//! Game container and phase machine.

use std::fmt;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::{Brain, InferenceBrain};
use crate::domain::digits::SecretNumber;
use crate::domain::player::Player;
use crate::domain::rules::PLAYERS;
use crate::domain::seeds::{derive_brain_seed, derive_engine_seed};
use crate::errors::domain::{DomainError, StateKind};

/// Which of the two seats a player occupies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    SinglePlayer,
    TwoPlayer,
}

/// Overall game progression phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for both secrets to be set.
    AwaitingSetup,
    /// Turns alternate until a winning guess or a concession.
    InProgress,
    /// Terminal; `winner` is None after a concession.
    Finished,
}

/// One game instance: two players, the turn pointer, and the RNG.
///
/// A game is an explicit, passable value with no process-wide state, so any
/// number of games can coexist in one process. It assumes at most one
/// caller at a time; the surrounding session layer owns serialization.
pub struct Game {
    pub mode: GameMode,
    pub phase: Phase,
    pub players: [Player; PLAYERS],
    pub active: PlayerSlot,
    pub turn_count: u32,
    pub winner: Option<PlayerSlot>,
    pub(crate) rng: StdRng,
    /// Self-driving decision maker per seat; `None` means the seat is
    /// interactive and driven externally.
    pub(crate) brains: [Option<Box<dyn Brain>>; PLAYERS],
}

impl Game {
    /// Human (seat one) vs AI (seat two). The AI's secret is generated
    /// immediately; the game starts once the human's secret is set.
    pub fn single_player(seed: Option<u64>) -> Self {
        let base = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(derive_engine_seed(base));

        let mut ai = Player::new("AI");
        ai.secret = Some(SecretNumber::random(&mut rng));

        Self {
            mode: GameMode::SinglePlayer,
            phase: Phase::AwaitingSetup,
            players: [Player::new("Player"), ai],
            active: PlayerSlot::One,
            turn_count: 0,
            winner: None,
            rng,
            brains: [
                None,
                Some(Box::new(InferenceBrain::new(Some(derive_brain_seed(base, 1))))),
            ],
        }
    }

    /// Two interactive players; both secrets must be set before play.
    pub fn two_player(seed: Option<u64>) -> Self {
        let base = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            mode: GameMode::TwoPlayer,
            phase: Phase::AwaitingSetup,
            players: [Player::new("Player 1"), Player::new("Player 2")],
            active: PlayerSlot::One,
            turn_count: 0,
            winner: None,
            rng: StdRng::seed_from_u64(derive_engine_seed(base)),
            brains: [None, None],
        }
    }

    pub fn new(mode: GameMode, seed: Option<u64>) -> Self {
        match mode {
            GameMode::SinglePlayer => Self::single_player(seed),
            GameMode::TwoPlayer => Self::two_player(seed),
        }
    }

    /// Replace the decision maker for a seat (AI-vs-AI simulations,
    /// scripted opponents in tests). `None` makes the seat interactive.
    pub fn attach_brain(&mut self, slot: PlayerSlot, brain: Option<Box<dyn Brain>>) {
        self.brains[slot.index()] = brain;
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("active", &self.active)
            .field("turn_count", &self.turn_count)
            .field("winner", &self.winner)
            .field(
                "brains",
                &self.brains.each_ref().map(|b| b.as_ref().map(|b| b.name())),
            )
            .finish_non_exhaustive()
    }
}

/// Fetch a player's secret, which must be set in the current phase.
pub fn require_secret(
    game: &Game,
    slot: PlayerSlot,
    ctx: &'static str,
) -> Result<SecretNumber, DomainError> {
    game.player(slot).secret.ok_or_else(|| {
        DomainError::state(
            StateKind::AwaitingSetup,
            format!("Invariant violated: secret must be set ({ctx})"),
        )
    })
}
