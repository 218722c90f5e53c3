//! Plays whole runs through `RunState` with a scripted player.
//!
//! The runner drives the same state machine as the terminal game; the enemy
//! timer is fast-forwarded instead of waited on.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::report::SimReport;
use crate::rewards::Reward;
use crate::run::{Phase, PlayerAction, RunInput, RunOutcome, RunState};

/// Heal below this fraction of max HP when a potion is available.
const HEAL_THRESHOLD: f64 = 0.4;
/// Take the potion reward while holding fewer than this many.
const POTION_RESERVE: u32 = 2;

/// Result of one simulated run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRunResult {
    pub seed: Option<u64>,
    pub outcome: Option<RunOutcome>,
    pub floor_reached: u32,
    pub gold: u32,
    pub enemies_killed: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub actions: u32,
}

impl SimRunResult {
    pub fn won(&self) -> bool {
        self.outcome == Some(RunOutcome::Won)
    }
}

/// Upper bound on result slots reserved up front; larger batches grow as they go.
const MAX_PREALLOCATED_RUNS: u32 = 10_000;

fn initial_capacity(runs: u32) -> usize {
    runs.min(MAX_PREALLOCATED_RUNS) as usize
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut results = Vec::with_capacity(initial_capacity(config.runs));

    for run_idx in 0..config.runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut result = simulate_single_run(config, &mut rng);
        result.seed = seed;

        if config.verbose {
            eprintln!(
                "Run {}/{} - {:?}, floor {}, gold {}, kills {}, actions {}",
                run_idx + 1,
                config.runs,
                result.outcome,
                result.floor_reached,
                result.gold,
                result.enemies_killed,
                result.actions
            );
        }
        results.push(result);
    }

    SimReport::from_runs(results)
}

/// Play one run to completion (or until the action cap).
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> SimRunResult {
    let mut run = RunState::with_config(config.run_config.clone(), rng);
    let mut actions = 0;

    while actions < config.max_actions_per_run && !run.phase.is_terminal() {
        match run.phase {
            Phase::PlayerTurn => {
                let action = choose_action(&run);
                run.process_input(RunInput::Action(action), rng);
                actions += 1;
            }
            Phase::EnemyTurn => {
                let delay = run.config.enemy_action_delay_ms;
                if !run.tick(delay, rng) {
                    break;
                }
            }
            Phase::VictoryOnFloor => {
                let options = run.reward_options();
                let choice = choose_reward(&options, run.potions, run.stats.floor);
                run.process_input(RunInput::ChooseReward(choice), rng);
                actions += 1;
            }
            Phase::Paused(_) => {
                run.resume();
            }
            Phase::RunWon | Phase::RunLost => break,
        }
    }

    let summary = run.summary();
    SimRunResult {
        seed: None,
        outcome: summary.outcome,
        floor_reached: summary.floor_reached,
        gold: summary.gold,
        enemies_killed: summary.enemies_killed,
        damage_dealt: summary.total_damage_dealt,
        damage_taken: summary.total_damage_taken,
        actions,
    }
}

/// Scripted turn: drink a potion when low, otherwise attack.
pub fn choose_action(run: &RunState) -> PlayerAction {
    if run.potions > 0 && run.player.hp_ratio() < HEAL_THRESHOLD {
        PlayerAction::Heal
    } else {
        PlayerAction::Attack
    }
}

/// Scripted reward pick, returned as an index into `options`.
pub fn choose_reward(options: &[Reward], potions: u32, floor: u32) -> usize {
    let preferred = if potions < POTION_RESERVE && options.contains(&Reward::Potions) {
        Reward::Potions
    } else if floor % 2 == 0 {
        Reward::Attack
    } else {
        Reward::MaxHp
    };
    options.iter().position(|r| *r == preferred).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_reward_prefers_potions_when_low() {
        let options = [Reward::MaxHp, Reward::Attack, Reward::Defense, Reward::Potions];
        assert_eq!(choose_reward(&options, 0, 3), 3);
        assert_eq!(choose_reward(&options, 2, 4), 1);
        assert_eq!(choose_reward(&options, 2, 5), 0);
    }

    #[test]
    fn test_choose_reward_without_potion_option() {
        let options = [Reward::MaxHp, Reward::Attack, Reward::Defense];
        assert_eq!(choose_reward(&options, 0, 2), 1);
    }

    #[test]
    fn test_initial_capacity_is_capped() {
        assert_eq!(initial_capacity(0), 0);
        assert_eq!(initial_capacity(100), 100);
        assert_eq!(initial_capacity(4_000_000_000), MAX_PREALLOCATED_RUNS as usize);
    }

    #[test]
    fn test_single_run_terminates() {
        let config = SimConfig::quick(1, 7);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = simulate_single_run(&config, &mut rng);
        assert!(result.outcome.is_some());
        assert!(result.floor_reached >= 1);
        assert!(result.actions > 0);
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let config = SimConfig::quick(5, 99);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.runs_won, b.runs_won);
        assert_eq!(a.floor_of_death, b.floor_of_death);
        assert!((a.avg_gold - b.avg_gold).abs() < f64::EPSILON);
    }
}
