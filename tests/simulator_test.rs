//! Integration test: headless balance simulator
//!
//! Runs small seeded batches through the public simulator API.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tower_rpg::run::RunOutcome;
use tower_rpg::simulator::{run_simulation, simulate_single_run, SimConfig, SimReport};

#[test]
fn test_batch_accounts_for_every_run() {
    let report = run_simulation(&SimConfig::quick(20, 42));
    assert_eq!(report.num_runs, 20);
    assert_eq!(report.runs.len(), 20);
    assert_eq!(report.runs_won + report.runs_lost + report.runs_stalled, 20);
    assert!((0.0..=1.0).contains(&report.win_rate));

    let deaths: u32 = report.floor_of_death.values().sum();
    assert_eq!(deaths, report.runs_lost);
}

#[test]
fn test_runs_use_consecutive_seeds() {
    let report = run_simulation(&SimConfig::quick(3, 100));
    let seeds: Vec<Option<u64>> = report.runs.iter().map(|r| r.seed).collect();
    assert_eq!(seeds, vec![Some(100), Some(101), Some(102)]);
}

#[test]
fn test_single_run_matches_batch_entry() {
    let config = SimConfig::quick(1, 5);
    let report = run_simulation(&config);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let single = simulate_single_run(&config, &mut rng);

    let batch = &report.runs[0];
    assert_eq!(batch.outcome, single.outcome);
    assert_eq!(batch.floor_reached, single.floor_reached);
    assert_eq!(batch.gold, single.gold);
    assert_eq!(batch.actions, single.actions);
}

#[test]
fn test_short_tower_is_winnable() {
    let mut config = SimConfig::quick(10, 1);
    config.run_config.max_floor = 2;
    let report = run_simulation(&config);

    // Two goblin floors are trivial for the scripted player
    assert_eq!(report.runs_won, 10);
    assert!(report.runs.iter().all(|r| r.won() && r.floor_reached == 2));
    assert!(report.floor_of_death.is_empty());
}

#[test]
fn test_action_cap_marks_run_stalled() {
    let mut config = SimConfig::quick(1, 9);
    config.max_actions_per_run = 1;
    let report = run_simulation(&config);
    assert_eq!(report.runs_stalled, 1);
    assert_eq!(report.runs[0].outcome, None);
    assert_eq!(report.runs[0].actions, 1);
}

#[test]
fn test_json_report_round_trip() {
    let report = run_simulation(&SimConfig::quick(4, 11));
    let json = report.to_json().unwrap();
    let parsed: SimReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.num_runs, report.num_runs);
    assert_eq!(parsed.runs_lost, report.runs_lost);
    assert_eq!(
        parsed.runs.iter().filter(|r| r.outcome == Some(RunOutcome::Won)).count() as u32,
        report.runs_won
    );
}
