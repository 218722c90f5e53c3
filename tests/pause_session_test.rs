//! Integration test: pause, resume and abandon
//!
//! The enemy's delayed attack must survive a pause and land exactly once.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tower_rpg::run::PausedFrom;
use tower_rpg::{InputOutcome, Phase, PlayerAction, RunConfig, RunInput, RunState, PLAYER_BASE_HP};

fn setup() -> (RunState, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let run = RunState::with_config(RunConfig::deterministic(), &mut rng);
    (run, rng)
}

#[test]
fn test_pause_during_enemy_turn_fires_once_after_resume() {
    let (mut run, mut rng) = setup();
    run.process_input(RunInput::Action(PlayerAction::Defend), &mut rng);
    let scheduled = run.pending_enemy_turn().expect("enemy turn scheduled");

    assert!(!run.tick(1_000, &mut rng));
    assert_eq!(run.process_input(RunInput::TogglePause, &mut rng), InputOutcome::Applied);
    assert_eq!(run.phase, Phase::Paused(PausedFrom::EnemyTurn));

    // Time passing while paused does nothing
    assert!(!run.tick(60_000, &mut rng));
    assert_eq!(run.player.current_hp, PLAYER_BASE_HP);

    assert_eq!(run.process_input(RunInput::Resume, &mut rng), InputOutcome::Applied);
    assert_eq!(run.phase, Phase::EnemyTurn);
    assert_eq!(run.pending_enemy_turn(), Some(scheduled));

    assert!(!run.tick(499, &mut rng));
    assert!(run.tick(1, &mut rng));
    // Goblin: (12 - 5) halved by defending
    assert_eq!(run.player.current_hp, PLAYER_BASE_HP - 3);
    assert_eq!(run.phase, Phase::PlayerTurn);

    assert!(!run.tick(60_000, &mut rng));
    assert_eq!(run.player.current_hp, PLAYER_BASE_HP - 3);
    assert_eq!(run.fire_enemy_turn(scheduled, &mut rng), InputOutcome::Ignored);
}

#[test]
fn test_esc_toggles_pause_from_player_turn() {
    let (mut run, mut rng) = setup();
    run.process_input(RunInput::TogglePause, &mut rng);
    assert!(run.is_paused());
    assert_eq!(
        run.process_input(RunInput::Action(PlayerAction::Attack), &mut rng),
        InputOutcome::Ignored
    );
    run.process_input(RunInput::TogglePause, &mut rng);
    assert_eq!(run.phase, Phase::PlayerTurn);
}

#[test]
fn test_pause_on_reward_screen_keeps_menu() {
    let (mut run, mut rng) = setup();
    run.current_enemy.as_mut().unwrap().combatant.current_hp = 1;
    run.process_input(RunInput::Action(PlayerAction::Attack), &mut rng);
    assert_eq!(run.phase, Phase::VictoryOnFloor);

    run.process_input(RunInput::TogglePause, &mut rng);
    assert!(run.reward_options().is_empty());
    assert_eq!(run.process_input(RunInput::ChooseReward(0), &mut rng), InputOutcome::Ignored);

    run.process_input(RunInput::Resume, &mut rng);
    assert_eq!(run.phase, Phase::VictoryOnFloor);
    assert_eq!(run.reward_options().len(), 4);
}

#[test]
fn test_abandon_only_from_pause() {
    let (mut run, mut rng) = setup();
    assert_eq!(run.process_input(RunInput::Abandon, &mut rng), InputOutcome::Ignored);
    assert!(!run.abandon_requested);

    run.process_input(RunInput::Action(PlayerAction::Attack), &mut rng);
    run.process_input(RunInput::TogglePause, &mut rng);
    assert_eq!(run.process_input(RunInput::Abandon, &mut rng), InputOutcome::Applied);
    assert!(run.abandon_requested);
    assert!(!run.enemy_turn_pending());

    // An abandoned run cannot be resumed
    assert_eq!(run.process_input(RunInput::Resume, &mut rng), InputOutcome::Ignored);
    assert!(run.is_paused());
}

#[test]
fn test_terminal_phases_cannot_pause() {
    let (mut run, mut rng) = setup();
    run.player.current_hp = 1;
    run.process_input(RunInput::Action(PlayerAction::Attack), &mut rng);
    run.tick(run.config.enemy_action_delay_ms, &mut rng);
    assert_eq!(run.phase, Phase::RunLost);
    assert_eq!(run.process_input(RunInput::TogglePause, &mut rng), InputOutcome::Ignored);
    assert_eq!(run.phase, Phase::RunLost);
}

#[test]
fn test_external_scheduler_fires_enemy_turn_without_ticks() {
    let (mut run, mut rng) = setup();
    run.process_input(RunInput::Action(PlayerAction::Attack), &mut rng);
    let handle = run.pending_enemy_turn().expect("enemy turn scheduled");

    assert_eq!(run.fire_enemy_turn(handle, &mut rng), InputOutcome::Applied);
    assert_eq!(run.phase, Phase::PlayerTurn);
    assert_eq!(run.player.current_hp, PLAYER_BASE_HP - 7);
    assert!(!run.enemy_turn_pending());

    // The same callback delivered twice lands once
    assert_eq!(run.fire_enemy_turn(handle, &mut rng), InputOutcome::Ignored);
    assert_eq!(run.player.current_hp, PLAYER_BASE_HP - 7);
}

#[test]
fn test_external_callback_ignored_while_paused() {
    let (mut run, mut rng) = setup();
    run.process_input(RunInput::Action(PlayerAction::Defend), &mut rng);
    let handle = run.pending_enemy_turn().expect("enemy turn scheduled");
    run.process_input(RunInput::TogglePause, &mut rng);

    assert_eq!(run.fire_enemy_turn(handle, &mut rng), InputOutcome::Ignored);
    assert_eq!(run.player.current_hp, PLAYER_BASE_HP);

    run.process_input(RunInput::Resume, &mut rng);
    assert_eq!(run.fire_enemy_turn(handle, &mut rng), InputOutcome::Applied);
    assert_eq!(run.player.current_hp, PLAYER_BASE_HP - 3);
}
