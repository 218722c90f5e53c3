//! Battle and floor progression state machine.
//!
//! `RunState` owns everything about one climb: the player, the floor's enemy,
//! potions, counters, the current [`Phase`] and the pending enemy-turn timer.
//! Inputs arrive one at a time through [`RunState::process_input`]; the enemy's
//! delayed attack arrives through [`RunState::tick`] (frame driven) or
//! [`RunState::fire_enemy_turn`] (external scheduler).

use rand::Rng;
use std::collections::VecDeque;

use super::timer::{EnemyTurnTimer, TimerHandle};
use super::types::*;
use crate::combat::{CombatLogEntry, Combatant};
use crate::core::config::RunConfig;
use crate::core::constants::*;
use crate::enemies::{generate_enemy, Enemy};
use crate::rewards::{apply_reward, offered_rewards, Reward};

#[derive(Debug, Clone)]
pub struct RunState {
    pub config: RunConfig,
    pub player: Combatant,
    /// Present while the floor's enemy is alive
    pub current_enemy: Option<Enemy>,
    pub potions: u32,
    pub stats: RunStats,
    pub phase: Phase,
    pub status: StatusMessage,
    pub combat_log: VecDeque<CombatLogEntry>,
    /// Set when the player asked to leave the run from the pause menu
    pub abandon_requested: bool,
    pub(super) enemy_timer: EnemyTurnTimer,
}

impl RunState {
    /// Start a new run with the default configuration.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_config(RunConfig::default(), rng)
    }

    pub fn with_config(config: RunConfig, rng: &mut impl Rng) -> Self {
        let mut run = Self {
            potions: config.starting_potions,
            config,
            player: Combatant::new_player(),
            current_enemy: None,
            stats: RunStats::default(),
            phase: Phase::PlayerTurn,
            status: StatusMessage::default(),
            combat_log: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
            abandon_requested: false,
            enemy_timer: EnemyTurnTimer::new(),
        };
        run.current_enemy = Some(generate_enemy(run.stats.floor, rng));
        run.announce(
            format!("Floor {} - To battle!", run.stats.floor),
            MESSAGE_DURATION_FRAMES,
            false,
            false,
        );
        run
    }

    /// Dispatch one input. Inputs the current phase does not accept are ignored.
    pub fn process_input(&mut self, input: RunInput, rng: &mut impl Rng) -> InputOutcome {
        match input {
            RunInput::Action(action) => self.player_action(action, rng),
            RunInput::ChooseReward(index) => self.choose_reward(index, rng),
            RunInput::TogglePause => self.toggle_pause(),
            RunInput::Resume => self.resume(),
            RunInput::Abandon => self.abandon(),
            RunInput::Restart => self.restart(rng),
        }
    }

    /// Resolve the player's action and hand the turn to the enemy.
    pub fn player_action(&mut self, action: PlayerAction, rng: &mut impl Rng) -> InputOutcome {
        if self.phase != Phase::PlayerTurn || self.current_enemy.is_none() {
            return InputOutcome::Ignored;
        }

        if action == PlayerAction::Heal && self.potions == 0 {
            self.status.show("No potions left!", MESSAGE_DURATION_FRAMES);
            return InputOutcome::Rejected;
        }

        self.player.is_defending = false;

        match action {
            PlayerAction::Attack => {
                let Some(enemy) = self.current_enemy.as_mut() else {
                    return InputOutcome::Ignored;
                };
                let damage =
                    self.player
                        .attack_target(&mut enemy.combatant, self.config.attack_variance, rng);
                let enemy_alive = enemy.is_alive();
                self.stats.total_damage_dealt += damage as u64;
                self.announce(
                    format!("You deal {} damage!", damage),
                    MESSAGE_DURATION_FRAMES,
                    true,
                    false,
                );

                if !enemy_alive {
                    self.on_enemy_defeated();
                    return InputOutcome::Applied;
                }
            }
            PlayerAction::Defend => {
                self.player.is_defending = true;
                self.announce(
                    "You brace yourself! Damage halved",
                    MESSAGE_DURATION_FRAMES,
                    true,
                    false,
                );
            }
            PlayerAction::Heal => {
                let healed = self.player.heal(self.config.potion_heal_amount);
                self.potions -= 1;
                self.announce(
                    format!("You recover {} HP!", healed),
                    MESSAGE_DURATION_FRAMES,
                    true,
                    false,
                );
            }
        }

        self.phase = Phase::EnemyTurn;
        self.enemy_timer.arm(self.config.enemy_action_delay_ms);
        InputOutcome::Applied
    }

    fn on_enemy_defeated(&mut self) {
        let gold = self
            .current_enemy
            .take()
            .map(|enemy| enemy.gold_reward)
            .unwrap_or(0);
        self.stats.enemies_killed += 1;
        self.stats.gold += gold;
        self.enemy_timer.cancel();
        self.phase = Phase::VictoryOnFloor;
        self.announce(
            format!("Victory! +{} gold", gold),
            LONG_MESSAGE_FRAMES,
            true,
            true,
        );
    }

    /// Advance the frame clock by `dt_ms`. Returns true if the enemy acted.
    pub fn tick(&mut self, dt_ms: u64, rng: &mut impl Rng) -> bool {
        let Some(handle) = self.enemy_timer.advance(dt_ms) else {
            return false;
        };
        if self.phase != Phase::EnemyTurn || !self.enemy_timer.consume(handle) {
            return false;
        }
        self.resolve_enemy_turn(rng);
        true
    }

    /// Callback for a scheduler that waits out the enemy delay itself.
    ///
    /// Only the live handle of the current enemy turn is accepted; stale,
    /// cancelled or paused handles are ignored.
    pub fn fire_enemy_turn(&mut self, handle: TimerHandle, rng: &mut impl Rng) -> InputOutcome {
        if self.phase != Phase::EnemyTurn || !self.enemy_timer.take(handle) {
            return InputOutcome::Ignored;
        }
        self.resolve_enemy_turn(rng);
        InputOutcome::Applied
    }

    /// The enemy always attacks.
    fn resolve_enemy_turn(&mut self, rng: &mut impl Rng) {
        debug_assert!(
            self.current_enemy.is_some(),
            "enemy turn fired with no enemy on the floor"
        );
        let Some(enemy) = self.current_enemy.as_mut() else {
            self.phase = Phase::PlayerTurn;
            return;
        };
        enemy.combatant.is_defending = false;

        let damage =
            enemy
                .combatant
                .attack_target(&mut self.player, self.config.attack_variance, rng);
        let enemy_name = enemy.name().to_string();
        self.stats.total_damage_taken += damage as u64;
        self.announce(
            format!("{} hits you for {} damage!", enemy_name, damage),
            MESSAGE_DURATION_FRAMES,
            false,
            false,
        );

        if !self.player.is_alive() {
            self.enemy_timer.cancel();
            self.phase = Phase::RunLost;
            self.announce("Defeat... Game over!", LONG_MESSAGE_FRAMES, false, true);
            return;
        }

        self.phase = Phase::PlayerTurn;
    }

    /// The reward menu for the current victory, empty outside `VictoryOnFloor`.
    pub fn reward_options(&self) -> Vec<Reward> {
        if self.phase != Phase::VictoryOnFloor {
            return Vec::new();
        }
        offered_rewards(self.potions, self.config.potion_reward_cap)
    }

    /// Pick entry `index` of the reward menu, then climb to the next floor.
    pub fn choose_reward(&mut self, index: usize, rng: &mut impl Rng) -> InputOutcome {
        let Some(reward) = self.reward_options().get(index).copied() else {
            return InputOutcome::Ignored;
        };
        let message = apply_reward(reward, &mut self.player, &mut self.potions);
        self.announce(message, MESSAGE_DURATION_FRAMES, true, false);
        self.advance_floor(rng);
        InputOutcome::Applied
    }

    fn advance_floor(&mut self, rng: &mut impl Rng) {
        self.stats.floor += 1;
        self.player.is_defending = false;

        if self.stats.floor > self.config.max_floor {
            self.current_enemy = None;
            self.phase = Phase::RunWon;
            self.announce(
                format!("You conquered the tower! Score: {}", self.stats.gold),
                RUN_WON_MESSAGE_FRAMES,
                false,
                true,
            );
            return;
        }

        let healed = self
            .player
            .heal(self.config.floor_heal_amount(self.player.max_hp));
        let enemy = generate_enemy(self.stats.floor, rng);
        let message = format!(
            "Floor {} - {} appears! (+{} HP)",
            self.stats.floor,
            enemy.name(),
            healed
        );
        self.current_enemy = Some(enemy);
        self.phase = Phase::PlayerTurn;
        self.announce(message, FLOOR_INTRO_MESSAGE_FRAMES, false, false);
    }

    /// Start over from floor 1. Only accepted once the run has ended.
    pub fn restart(&mut self, rng: &mut impl Rng) -> InputOutcome {
        if !self.phase.is_terminal() {
            return InputOutcome::Ignored;
        }
        self.enemy_timer.cancel();
        self.player = Combatant::new_player();
        self.potions = self.config.starting_potions;
        self.stats = RunStats::default();
        self.current_enemy = Some(generate_enemy(self.stats.floor, rng));
        self.abandon_requested = false;
        self.combat_log.clear();
        self.phase = Phase::PlayerTurn;
        self.announce(
            format!("New adventure! Floor {}", self.stats.floor),
            MESSAGE_DURATION_FRAMES,
            false,
            false,
        );
        InputOutcome::Applied
    }

    /// Count down the status message by one frame.
    pub fn update_frame(&mut self) {
        self.status.tick();
    }

    pub fn summary(&self) -> RunSummary {
        let outcome = match self.phase {
            Phase::RunWon => Some(RunOutcome::Won),
            Phase::RunLost => Some(RunOutcome::Lost),
            _ => None,
        };
        RunSummary {
            outcome,
            floor_reached: self.stats.floor.min(self.config.max_floor),
            enemies_killed: self.stats.enemies_killed,
            gold: self.stats.gold,
            total_damage_dealt: self.stats.total_damage_dealt,
            total_damage_taken: self.stats.total_damage_taken,
        }
    }

    pub fn enemy_turn_pending(&self) -> bool {
        self.enemy_timer.is_armed()
    }

    pub fn pending_enemy_turn(&self) -> Option<TimerHandle> {
        self.enemy_timer.pending_handle()
    }

    /// Set the status line and record it in the combat log.
    pub(super) fn announce(
        &mut self,
        message: impl Into<String>,
        frames: u32,
        is_player_action: bool,
        is_critical_event: bool,
    ) {
        let message = message.into();
        if self.combat_log.len() >= COMBAT_LOG_CAPACITY {
            self.combat_log.pop_front();
        }
        self.combat_log.push_back(CombatLogEntry {
            message: message.clone(),
            is_player_action,
            is_critical_event,
        });
        self.status.show(message, frames);
    }
}
