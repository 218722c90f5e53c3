use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::combat_math::{
    apply_damage, apply_heal, calculate_damage_taken, is_alive, roll_attack_damage,
};
use crate::core::constants::*;

/// Anything that can deal and receive damage: the player or the current enemy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Set by the defend action, cleared by the owner's next action.
    #[serde(default)]
    pub is_defending: bool,
}

impl Combatant {
    pub fn new(name: impl Into<String>, max_hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            current_hp: max_hp,
            max_hp,
            attack,
            defense,
            is_defending: false,
        }
    }

    /// Fresh player at base stats.
    pub fn new_player() -> Self {
        Self::new(
            PLAYER_NAME,
            PLAYER_BASE_HP,
            PLAYER_BASE_ATTACK,
            PLAYER_BASE_DEFENSE,
        )
    }

    pub fn is_alive(&self) -> bool {
        is_alive(self.current_hp)
    }

    /// Receives an attack of `raw_damage`, returning the damage actually applied.
    pub fn take_damage(&mut self, raw_damage: i64) -> u32 {
        let damage = calculate_damage_taken(raw_damage, self.defense, self.is_defending);
        self.current_hp = apply_damage(self.current_hp, damage);
        damage
    }

    /// Rolls an attack against `target` and returns the damage dealt.
    ///
    /// Only the target is mutated. Clearing the attacker's defending flag is
    /// up to whoever drives the turn.
    pub fn attack_target(&self, target: &mut Combatant, variance: u32, rng: &mut impl Rng) -> u32 {
        let raw_damage = roll_attack_damage(self.attack, variance, rng);
        target.take_damage(raw_damage)
    }

    /// Restores up to `amount` HP and returns how much was restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let (hp, restored) = apply_heal(self.current_hp, self.max_hp, amount);
        self.current_hp = hp;
        restored
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        (self.current_hp as f64 / self.max_hp as f64).clamp(0.0, 1.0)
    }
}

/// One line of the combat log shown next to the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub message: String,
    pub is_player_action: bool,
    /// Kill, defeat or tower cleared
    pub is_critical_event: bool,
}
