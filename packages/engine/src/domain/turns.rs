//! Turn protocol: setup, guesses, item invocation, and AI driving.
//!
//! Every public function here is atomic: validation happens before any
//! state is touched, so a rejected call leaves the game exactly as it was.
//! Malformed guesses and unavailable items are recoverable errors and never
//! consume the turn.

use serde::{Deserialize, Serialize};

use crate::ai::Brain;
use crate::domain::digits::SecretNumber;
use crate::domain::items::{concession, resolve_item, EffectResult, ItemEffect, ItemRequest};
use crate::domain::scoring::{score, ScoreResult};
use crate::domain::state::{require_secret, Game, Phase, PlayerSlot};
use crate::errors::domain::{DomainError, StateKind};

/// Result of submitting one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub guess: SecretNumber,
    pub score: ScoreResult,
    /// The guess ended the game in the acting player's favour.
    pub winning: bool,
    /// Forced calls still owed under DOUBLE before the turn can pass.
    pub calls_remaining: u8,
    /// The active player switched after this guess.
    pub turn_passed: bool,
}

/// One visible action taken by a self-driving player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiTurnEvent {
    ItemUsed(EffectResult),
    Called(GuessOutcome),
}

fn check_in_progress(game: &Game) -> Result<(), DomainError> {
    match game.phase {
        Phase::AwaitingSetup => Err(DomainError::state(
            StateKind::AwaitingSetup,
            "both secrets must be set before play",
        )),
        Phase::Finished => Err(DomainError::state(
            StateKind::GameFinished,
            "the game is already over",
        )),
        Phase::InProgress => Ok(()),
    }
}

fn check_active(game: &Game, slot: PlayerSlot) -> Result<(), DomainError> {
    if game.active != slot {
        return Err(DomainError::state(
            StateKind::OutOfTurn,
            format!("it is {}'s turn", game.player(game.active).name),
        ));
    }
    Ok(())
}

/// Set a player's secret during setup. Starts the game once both are set.
pub fn set_secret(game: &mut Game, slot: PlayerSlot, digits: &str) -> Result<(), DomainError> {
    match game.phase {
        Phase::AwaitingSetup => {}
        Phase::InProgress => {
            return Err(DomainError::state(
                StateKind::SecretAlreadySet,
                "secrets can only be set during setup",
            ));
        }
        Phase::Finished => {
            return Err(DomainError::state(
                StateKind::GameFinished,
                "the game is already over",
            ));
        }
    }
    if game.player(slot).secret.is_some() {
        return Err(DomainError::state(
            StateKind::SecretAlreadySet,
            format!("{} already has a number", game.player(slot).name),
        ));
    }

    let secret = SecretNumber::parse(digits)?;
    game.player_mut(slot).secret = Some(secret);

    if game.players.iter().all(|p| p.secret.is_some()) {
        game.phase = Phase::InProgress;
        tracing::info!(mode = ?game.mode, "game started");
    }
    Ok(())
}

/// Submit a guess for the active player and advance the turn machine.
///
/// An invalid guess string is rejected without consuming the turn. Under
/// DOUBLE the active player keeps the turn until the forced-call counter
/// reaches zero; item use stays blocked for those calls.
pub fn submit_guess(
    game: &mut Game,
    slot: PlayerSlot,
    digits: &str,
) -> Result<GuessOutcome, DomainError> {
    check_in_progress(game)?;
    check_active(game, slot)?;

    let guess = SecretNumber::parse(digits)?;
    let answer = require_secret(game, slot.opponent(), "submit_guess")?;
    let result = score(answer, guess);

    let player = game.player_mut(slot);
    player.record_call(guess, result);

    tracing::debug!(
        player = %game.player(slot).name,
        guess = %guess,
        eat = result.eat,
        bite = result.bite,
        "guess scored"
    );

    if result.is_win() {
        game.phase = Phase::Finished;
        game.winner = Some(slot);
        tracing::info!(winner = %game.player(slot).name, "game finished");
        return Ok(GuessOutcome {
            guess,
            score: result,
            winning: true,
            calls_remaining: 0,
            turn_passed: false,
        });
    }

    let player = game.player_mut(slot);
    if player.double_calls_remaining > 0 {
        player.double_calls_remaining -= 1;
        let calls_remaining = player.double_calls_remaining;
        return Ok(GuessOutcome {
            guess,
            score: result,
            winning: false,
            calls_remaining,
            turn_passed: false,
        });
    }

    pass_turn(game, slot);
    Ok(GuessOutcome {
        guess,
        score: result,
        winning: false,
        calls_remaining: 0,
        turn_passed: true,
    })
}

fn pass_turn(game: &mut Game, from: PlayerSlot) {
    game.player_mut(from).reset_turn();
    game.active = from.opponent();
    game.turn_count += 1;
}

/// Invoke an item (or GIVEUP) for the active player.
///
/// At most one item per turn and one use per item per game; a rejected
/// invocation has no side effect.
pub fn use_item(
    game: &mut Game,
    slot: PlayerSlot,
    token: &str,
    target_digit: Option<u8>,
) -> Result<EffectResult, DomainError> {
    check_in_progress(game)?;
    check_active(game, slot)?;

    let name = match token.parse::<ItemRequest>()? {
        ItemRequest::GiveUp => return concede(game, slot),
        ItemRequest::Item(name) => name,
    };

    game.player(slot).check_item_available(name)?;

    let own = require_secret(game, slot, "use_item")?;
    let opponent = require_secret(game, slot.opponent(), "use_item")?;
    let result = resolve_item(name, own, opponent, target_digit, &mut game.rng)?;

    // Commit: everything past this point must succeed.
    game.player_mut(slot).mark_item_used(name);
    match &result.effect {
        ItemEffect::DoubleReveal {
            position,
            digit,
            calls_granted,
        } => {
            let player = game.player_mut(slot);
            player.double_calls_remaining = *calls_granted;
            player.double_revealed_pos = Some(*position);
            // The leak goes to the opponent's knowledge of this number.
            game.player_mut(slot.opponent()).known_digits[*position] = Some(*digit);
        }
        ItemEffect::Target { digit, positions } => {
            let player = game.player_mut(slot);
            for &p in positions {
                player.known_digits[p] = Some(*digit);
            }
        }
        ItemEffect::Shuffle { new_number, .. } => {
            game.player_mut(slot).secret = Some(*new_number);
        }
        ItemEffect::Change { new_number, .. } => {
            game.player_mut(slot).secret = Some(*new_number);
        }
        ItemEffect::HighLow { .. }
        | ItemEffect::Slash { .. }
        | ItemEffect::ChangeUnavailable
        | ItemEffect::Concession { .. } => {}
    }

    tracing::debug!(player = %game.player(slot).name, item = %name, "item resolved");
    Ok(result)
}

/// Concede the game, revealing the conceding player's own number. Nobody
/// is declared winner.
pub fn concede(game: &mut Game, slot: PlayerSlot) -> Result<EffectResult, DomainError> {
    check_in_progress(game)?;
    check_active(game, slot)?;

    let own = require_secret(game, slot, "concede")?;
    let result = concession(own);
    game.phase = Phase::Finished;
    game.winner = None;
    tracing::info!(player = %game.player(slot).name, "game conceded");
    Ok(result)
}

/// Run the active player's whole turn through its attached brain: optional
/// item, then one or more guesses (more than one only under DOUBLE).
///
/// Brain failures degrade instead of aborting: a failed item choice is
/// skipped, a failed guess falls back to a fresh random number.
pub fn drive_ai(game: &mut Game) -> Result<Vec<AiTurnEvent>, DomainError> {
    check_in_progress(game)?;
    let slot = game.active;

    let Some(brain) = game.brains[slot.index()].take() else {
        return Err(DomainError::state(
            StateKind::OutOfTurn,
            format!("{} is not AI-driven", game.player(slot).name),
        ));
    };

    let result = run_brain_turn(game, slot, brain.as_ref());
    game.brains[slot.index()] = Some(brain);
    result
}

fn run_brain_turn(
    game: &mut Game,
    slot: PlayerSlot,
    brain: &dyn Brain,
) -> Result<Vec<AiTurnEvent>, DomainError> {
    let mut events = Vec::new();

    let view = game.snapshot(slot);
    match brain.choose_item(&view) {
        Ok(Some(play)) => match use_item(game, slot, play.name.token(), play.target_digit) {
            Ok(effect) => {
                let ended = effect.game_ended;
                events.push(AiTurnEvent::ItemUsed(effect));
                if ended {
                    return Ok(events);
                }
            }
            Err(err) => {
                tracing::warn!(%err, "ai item invocation rejected, skipping item");
            }
        },
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(%err, "ai item choice failed, skipping item");
        }
    }

    loop {
        let view = game.snapshot(slot);
        let guess = match brain.choose_guess(&view) {
            Ok(guess) => guess,
            Err(err) => {
                tracing::warn!(%err, "ai guess failed, falling back to random");
                SecretNumber::random(&mut game.rng)
            }
        };
        let outcome = submit_guess(game, slot, &guess.to_string())?;
        brain.observe(guess, outcome.score);
        let done = outcome.winning || outcome.turn_passed;
        events.push(AiTurnEvent::Called(outcome));
        if done {
            return Ok(events);
        }
    }
}
