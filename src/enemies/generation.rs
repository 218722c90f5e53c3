//! Floor-based enemy generation.
//!
//! Which archetypes may appear is decided by [`TIER_TABLE`], an ordered list
//! of floor bands evaluated top-down. The draw within a band is random;
//! callers pass the RNG so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

use super::types::{Archetype, Enemy};
use crate::combat::Combatant;
use crate::core::constants::FLOOR_SCALING_PER_FLOOR;

/// One band of the tier table: the floors it covers and who may spawn there.
#[derive(Debug, Clone)]
pub struct TierRule {
    pub floors: RangeInclusive<u32>,
    pub archetypes: &'static [Archetype],
}

pub const TIER_TABLE: &[TierRule] = &[
    TierRule {
        floors: 1..=3,
        archetypes: &[Archetype::Goblin],
    },
    TierRule {
        floors: 4..=6,
        archetypes: &[Archetype::Goblin, Archetype::Orc],
    },
    TierRule {
        floors: 7..=10,
        archetypes: &[Archetype::Orc, Archetype::Troll],
    },
    TierRule {
        floors: 11..=15,
        archetypes: &[Archetype::Troll, Archetype::Demon],
    },
    TierRule {
        floors: 16..=u32::MAX,
        archetypes: &[Archetype::Demon, Archetype::Dragon],
    },
];

/// Archetypes eligible on `floor`. Floor 0 is treated as floor 1.
pub fn eligible_archetypes(floor: u32) -> &'static [Archetype] {
    let floor = floor.max(1);
    TIER_TABLE
        .iter()
        .find(|rule| rule.floors.contains(&floor))
        .map(|rule| rule.archetypes)
        .unwrap_or(&[Archetype::Goblin])
}

/// Stat multiplier for `floor`: `1 + 0.1 * (floor - 1)`.
pub fn floor_multiplier(floor: u32) -> f64 {
    1.0 + floor.saturating_sub(1) as f64 * FLOOR_SCALING_PER_FLOOR
}

/// Scale a base stat to `floor`, truncating.
pub fn scale_stat(base: u32, floor: u32) -> u32 {
    (base as f64 * floor_multiplier(floor)) as u32
}

/// Picks the archetype for `floor`. Single-archetype bands never draw from the RNG.
pub fn choose_archetype(floor: u32, rng: &mut impl Rng) -> Archetype {
    match eligible_archetypes(floor) {
        [only] => *only,
        options => options.choose(rng).copied().unwrap_or(Archetype::Goblin),
    }
}

/// Builds a specific archetype scaled to `floor`.
pub fn spawn_archetype(archetype: Archetype, floor: u32) -> Enemy {
    let base = archetype.base_stats();
    let max_hp = scale_stat(base.hp, floor);
    Enemy {
        archetype,
        combatant: Combatant::new(
            archetype.name(),
            max_hp,
            scale_stat(base.attack, floor),
            scale_stat(base.defense, floor),
        ),
        gold_reward: scale_stat(base.gold, floor),
    }
}

/// Generates the enemy for `floor`.
pub fn generate_enemy(floor: u32, rng: &mut impl Rng) -> Enemy {
    spawn_archetype(choose_archetype(floor, rng), floor)
}
