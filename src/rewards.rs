//! Floor-clear rewards.
//!
//! After each victory the player picks exactly one permanent upgrade from a
//! menu built by [`offered_rewards`].

use serde::{Deserialize, Serialize};

use crate::combat::Combatant;
use crate::core::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reward {
    MaxHp,
    Attack,
    Defense,
    Potions,
}

impl Reward {
    /// Button label for the reward menu.
    pub fn label(&self) -> String {
        match self {
            Self::MaxHp => format!("+{} Max HP", REWARD_MAX_HP),
            Self::Attack => format!("+{} Attack", REWARD_ATTACK),
            Self::Defense => format!("+{} Defense", REWARD_DEFENSE),
            Self::Potions => format!("+{} Potions", REWARD_POTIONS),
        }
    }
}

/// The reward menu, in display order. Potions only appear below `potion_cap`.
pub fn offered_rewards(potions: u32, potion_cap: u32) -> Vec<Reward> {
    let mut rewards = vec![Reward::MaxHp, Reward::Attack, Reward::Defense];
    if potions < potion_cap {
        rewards.push(Reward::Potions);
    }
    rewards
}

/// Apply a reward to the player and potion count, returning the status message.
pub fn apply_reward(reward: Reward, player: &mut Combatant, potions: &mut u32) -> String {
    match reward {
        Reward::MaxHp => {
            player.max_hp += REWARD_MAX_HP;
            let healed = player.heal(REWARD_MAX_HP);
            format!("+{} max HP! ({} HP restored)", REWARD_MAX_HP, healed)
        }
        Reward::Attack => {
            player.attack += REWARD_ATTACK;
            format!("+{} attack!", REWARD_ATTACK)
        }
        Reward::Defense => {
            player.defense += REWARD_DEFENSE;
            format!("+{} defense!", REWARD_DEFENSE)
        }
        Reward::Potions => {
            *potions += REWARD_POTIONS;
            format!("+{} potions!", REWARD_POTIONS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offered_rewards_below_cap() {
        assert_eq!(
            offered_rewards(3, 5),
            vec![Reward::MaxHp, Reward::Attack, Reward::Defense, Reward::Potions]
        );
        assert_eq!(offered_rewards(0, 5).len(), 4);
        assert_eq!(offered_rewards(4, 5).len(), 4);
    }

    #[test]
    fn test_offered_rewards_at_or_above_cap() {
        let expected = vec![Reward::MaxHp, Reward::Attack, Reward::Defense];
        assert_eq!(offered_rewards(5, 5), expected);
        assert_eq!(offered_rewards(6, 5), expected);
    }

    #[test]
    fn test_max_hp_reward_heals_and_raises_cap() {
        let mut player = Combatant::new_player();
        player.current_hp = 50;
        let mut potions = 3;

        let msg = apply_reward(Reward::MaxHp, &mut player, &mut potions);
        assert_eq!(player.max_hp, 115);
        assert_eq!(player.current_hp, 65);
        assert_eq!(potions, 3);
        assert!(msg.contains("15 HP restored"));
    }

    #[test]
    fn test_max_hp_reward_at_full_hp() {
        let mut player = Combatant::new_player();
        let mut potions = 0;
        apply_reward(Reward::MaxHp, &mut player, &mut potions);
        assert_eq!(player.max_hp, 115);
        assert_eq!(player.current_hp, 115);
    }

    #[test]
    fn test_attack_and_defense_rewards() {
        let mut player = Combatant::new_player();
        let mut potions = 0;
        apply_reward(Reward::Attack, &mut player, &mut potions);
        apply_reward(Reward::Defense, &mut player, &mut potions);
        assert_eq!(player.attack, 23);
        assert_eq!(player.defense, 7);
        assert_eq!(player.max_hp, 100);
    }

    #[test]
    fn test_potion_reward() {
        let mut player = Combatant::new_player();
        let mut potions = 4;
        let msg = apply_reward(Reward::Potions, &mut player, &mut potions);
        assert_eq!(potions, 6);
        assert_eq!(msg, "+2 potions!");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Reward::MaxHp.label(), "+15 Max HP");
        assert_eq!(Reward::Potions.label(), "+2 Potions");
    }
}
