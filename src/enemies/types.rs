//! Enemy archetypes and the enemy instance spawned on each floor.

use serde::{Deserialize, Serialize};

use crate::combat::Combatant;

/// Display colour of an archetype, mapped to a terminal colour by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyColor {
    Green,
    Orange,
    Purple,
    DarkRed,
    Gold,
}

/// Unscaled stats of an archetype (floor 1 values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold: u32,
}

/// Enemy templates, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Goblin,
    Orc,
    Troll,
    Demon,
    Dragon,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Goblin,
        Archetype::Orc,
        Archetype::Troll,
        Archetype::Demon,
        Archetype::Dragon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Goblin => "Goblin",
            Self::Orc => "Orc",
            Self::Troll => "Troll",
            Self::Demon => "Demon",
            Self::Dragon => "Dragon",
        }
    }

    pub fn base_stats(&self) -> ArchetypeStats {
        let (hp, attack, defense, gold) = match self {
            Self::Goblin => (40, 12, 2, 10),
            Self::Orc => (70, 18, 5, 25),
            Self::Troll => (100, 22, 8, 40),
            Self::Demon => (140, 28, 10, 60),
            Self::Dragon => (200, 35, 15, 100),
        };
        ArchetypeStats {
            hp,
            attack,
            defense,
            gold,
        }
    }

    pub fn color(&self) -> EnemyColor {
        match self {
            Self::Goblin => EnemyColor::Green,
            Self::Orc => EnemyColor::Orange,
            Self::Troll => EnemyColor::Purple,
            Self::Demon => EnemyColor::DarkRed,
            Self::Dragon => EnemyColor::Gold,
        }
    }
}

/// The enemy guarding the current floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: Archetype,
    pub combatant: Combatant,
    /// Gold credited when this enemy is defeated
    pub gold_reward: u32,
}

impl Enemy {
    pub fn name(&self) -> &str {
        &self.combatant.name
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    pub fn color(&self) -> EnemyColor {
        self.archetype.color()
    }
}
