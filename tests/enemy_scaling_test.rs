//! Integration test: enemy generation across the tower and damage rules
//!
//! Covers the tier bands, per-floor stat scaling and the combatant
//! damage/heal guarantees the battle relies on.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_rpg::enemies::{eligible_archetypes, generate_enemy, scale_stat, spawn_archetype};
use tower_rpg::{Archetype, Combatant, MAX_FLOOR};

#[test]
fn test_generated_enemy_stats_follow_floor_scaling() {
    let mut rng = StdRng::seed_from_u64(31);
    for floor in 1..=MAX_FLOOR {
        for _ in 0..10 {
            let enemy = generate_enemy(floor, &mut rng);
            let base = enemy.archetype.base_stats();
            assert_eq!(enemy.combatant.max_hp, scale_stat(base.hp, floor));
            assert_eq!(enemy.combatant.current_hp, enemy.combatant.max_hp);
            assert_eq!(enemy.combatant.attack, scale_stat(base.attack, floor));
            assert_eq!(enemy.combatant.defense, scale_stat(base.defense, floor));
            assert_eq!(enemy.gold_reward, scale_stat(base.gold, floor));
            assert!(eligible_archetypes(floor).contains(&enemy.archetype));
        }
    }
}

#[test]
fn test_tier_bands() {
    assert_eq!(eligible_archetypes(1), &[Archetype::Goblin]);
    assert_eq!(eligible_archetypes(3), &[Archetype::Goblin]);
    assert_eq!(eligible_archetypes(4), &[Archetype::Goblin, Archetype::Orc]);
    assert_eq!(eligible_archetypes(7), &[Archetype::Orc, Archetype::Troll]);
    assert_eq!(eligible_archetypes(11), &[Archetype::Troll, Archetype::Demon]);
    assert_eq!(eligible_archetypes(16), &[Archetype::Demon, Archetype::Dragon]);
    assert_eq!(eligible_archetypes(20), &[Archetype::Demon, Archetype::Dragon]);
}

#[test]
fn test_both_archetypes_of_a_band_appear() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut seen_goblin = false;
    let mut seen_orc = false;
    for _ in 0..200 {
        match generate_enemy(5, &mut rng).archetype {
            Archetype::Goblin => seen_goblin = true,
            Archetype::Orc => seen_orc = true,
            other => panic!("{:?} outside its band", other),
        }
    }
    assert!(seen_goblin && seen_orc);
}

#[test]
fn test_orc_on_floor_four() {
    let orc = spawn_archetype(Archetype::Orc, 4);
    assert_eq!(orc.combatant.max_hp, 91);
    assert_eq!(orc.combatant.attack, 23);
    assert_eq!(orc.combatant.defense, 6);
    assert_eq!(orc.gold_reward, 32);
}

#[test]
fn test_damage_is_always_at_least_one() {
    for defense in [0, 5, 50, 500] {
        for raw in [-100_i64, 0, 1, 10, 1_000] {
            for defending in [false, true] {
                let mut target = Combatant::new("Dummy", 10_000, 0, defense);
                target.is_defending = defending;
                assert!(target.take_damage(raw) >= 1);
            }
        }
    }
}

#[test]
fn test_defending_never_increases_damage() {
    for defense in 0..30 {
        for raw in 0..120 {
            let mut open = Combatant::new("Open", 10_000, 0, defense);
            let mut guarded = Combatant::new("Guarded", 10_000, 0, defense);
            guarded.is_defending = true;
            assert!(guarded.take_damage(raw) <= open.take_damage(raw));
        }
    }
}

#[test]
fn test_heal_is_capped_at_max() {
    let mut player = Combatant::new_player();
    assert_eq!(player.heal(30), 0);

    player.current_hp = 90;
    assert_eq!(player.heal(30), 10);
    assert_eq!(player.current_hp, player.max_hp);
}
