//! Run configuration.
//!
//! Holds the tunables a run is played with. Production always uses
//! `RunConfig::default()`; tests and the simulator override fields to make
//! runs shorter or deterministic.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Configuration for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Last floor of the tower. Clearing it wins the run.
    pub max_floor: u32,

    /// Fraction of max HP restored when entering a new floor
    pub floor_heal_fraction: f64,

    /// Potions held at the start of a run
    pub starting_potions: u32,

    /// HP restored by one potion
    pub potion_heal_amount: u32,

    /// The potion reward is offered only while fewer potions than this are held
    pub potion_reward_cap: u32,

    /// Delay between a resolved player action and the enemy's response
    pub enemy_action_delay_ms: u64,

    /// Symmetric +/- range added to every attack roll (0 = deterministic)
    pub attack_variance: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_floor: MAX_FLOOR,
            floor_heal_fraction: FLOOR_HEAL_FRACTION,
            starting_potions: STARTING_POTIONS,
            potion_heal_amount: POTION_HEAL_AMOUNT,
            potion_reward_cap: POTION_REWARD_CAP,
            enemy_action_delay_ms: ENEMY_ACTION_DELAY_MS,
            attack_variance: ATTACK_VARIANCE,
        }
    }
}

impl RunConfig {
    /// Default configuration with attack variance disabled.
    pub fn deterministic() -> Self {
        Self {
            attack_variance: 0,
            ..Default::default()
        }
    }

    /// HP restored when entering a new floor, truncated.
    pub fn floor_heal_amount(&self, max_hp: u32) -> u32 {
        (max_hp as f64 * self.floor_heal_fraction) as u32
    }
}
