use crate::domain::snapshot::{GameSnapshot, PhaseSnapshot};
use crate::domain::state::{Game, PlayerSlot};
use crate::domain::turns::{set_secret, submit_guess, use_item};

fn game_in_progress() -> Game {
    let mut game = Game::two_player(Some(21));
    set_secret(&mut game, PlayerSlot::One, "123").unwrap();
    set_secret(&mut game, PlayerSlot::Two, "456").unwrap();
    game
}

#[test]
fn setup_snapshot_reports_which_secrets_are_set() {
    let mut game = Game::two_player(Some(21));
    let snap = game.snapshot(PlayerSlot::One);
    assert_eq!(
        snap.phase,
        PhaseSnapshot::AwaitingSetup {
            secrets_set: [false, false],
        }
    );

    set_secret(&mut game, PlayerSlot::One, "123").unwrap();
    let snap = game.snapshot(PlayerSlot::Two);
    assert_eq!(
        snap.phase,
        PhaseSnapshot::AwaitingSetup {
            secrets_set: [true, false],
        }
    );
}

#[test]
fn in_progress_snapshot_hides_the_opponent_secret() {
    let game = game_in_progress();

    let snap = game.snapshot(PlayerSlot::One);
    assert_eq!(snap.phase, PhaseSnapshot::InProgress);
    assert_eq!(
        snap.players[0].secret.map(|s| s.to_string()),
        Some("123".into())
    );
    assert_eq!(snap.players[1].secret, None);

    // And symmetrically for the other seat.
    let snap = game.snapshot(PlayerSlot::Two);
    assert_eq!(snap.players[0].secret, None);
    assert_eq!(
        snap.players[1].secret.map(|s| s.to_string()),
        Some("456".into())
    );
}

#[test]
fn serialized_snapshot_never_contains_the_hidden_number() {
    let game = game_in_progress();
    let json = serde_json::to_string(&game.snapshot(PlayerSlot::One)).unwrap();
    assert!(json.contains("123"));
    assert!(!json.contains("456"));
}

#[test]
fn finished_snapshot_reveals_both_secrets_and_the_winner() {
    let mut game = game_in_progress();
    submit_guess(&mut game, PlayerSlot::One, "456").unwrap();

    for viewer in [PlayerSlot::One, PlayerSlot::Two] {
        let snap = game.snapshot(viewer);
        assert_eq!(
            snap.phase,
            PhaseSnapshot::Finished {
                winner: Some(PlayerSlot::One),
            }
        );
        assert!(snap.players[0].secret.is_some());
        assert!(snap.players[1].secret.is_some());
    }
}

#[test]
fn conceded_snapshot_has_no_winner() {
    let mut game = game_in_progress();
    use_item(&mut game, PlayerSlot::One, "GIVEUP", None).unwrap();
    let snap = game.snapshot(PlayerSlot::Two);
    assert_eq!(snap.phase, PhaseSnapshot::Finished { winner: None });
}

#[test]
fn snapshot_carries_public_turn_state() {
    let mut game = game_in_progress();
    use_item(&mut game, PlayerSlot::One, "DOUBLE", None).unwrap();
    submit_guess(&mut game, PlayerSlot::One, "789").unwrap();

    let snap = game.snapshot(PlayerSlot::Two);
    let actor = &snap.players[0];
    assert_eq!(actor.double_calls_remaining, 1);
    assert!(actor.double_revealed_pos.is_some());
    assert!(actor.items.iter().any(|i| i.used));
    assert_eq!(actor.call_history.len(), 1);
    // The opponent learned the leaked digit.
    assert!(snap.players[1].known_digits.iter().any(|d| d.is_some()));
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut game = game_in_progress();
    use_item(&mut game, PlayerSlot::One, "SLASH", None).unwrap();
    submit_guess(&mut game, PlayerSlot::One, "789").unwrap();

    let snap = game.snapshot(PlayerSlot::One);
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
