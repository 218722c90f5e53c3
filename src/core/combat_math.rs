//! Shared combat math functions for the game and the simulator.
//!
//! These pure functions calculate combat outcomes without side effects.

use super::constants::{DEFEND_DAMAGE_FACTOR, MIN_DAMAGE};
use rand::Rng;

/// Roll the raw damage of one attack.
///
/// Adds a uniform integer in `[-variance, +variance]` to `attack`. A variance
/// of zero never touches the RNG. The result may be zero or negative; the
/// damage floor is applied by [`calculate_damage_taken`].
pub fn roll_attack_damage(attack: u32, variance: u32, rng: &mut impl Rng) -> i64 {
    let spread = variance as i64;
    let offset = if spread == 0 {
        0
    } else {
        rng.gen_range(-spread..=spread)
    };
    attack as i64 + offset
}

/// Calculate actual damage taken after defense.
///
/// # Arguments
/// * `raw_damage` - Incoming damage before defense
/// * `defense` - Defense stat
/// * `is_defending` - Whether the target braced this turn
///
/// # Returns
/// Damage to subtract from HP, never below [`MIN_DAMAGE`]
pub fn calculate_damage_taken(raw_damage: i64, defense: u32, is_defending: bool) -> u32 {
    let floor = MIN_DAMAGE as i64;
    let mut damage = (raw_damage - defense as i64).max(floor);
    if is_defending {
        damage = ((damage as f64 * DEFEND_DAMAGE_FACTOR) as i64).max(floor);
    }
    damage.min(u32::MAX as i64) as u32
}

/// Apply damage to HP, returning remaining HP.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply healing, returning (new HP, HP actually restored).
pub fn apply_heal(current_hp: u32, max_hp: u32, amount: u32) -> (u32, u32) {
    let healed_hp = current_hp.saturating_add(amount).min(max_hp);
    (healed_hp, healed_hp.saturating_sub(current_hp))
}

/// Check if an entity is still alive.
pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}
