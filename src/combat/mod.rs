//! Combatant model: HP, attack, defense and the damage/heal arithmetic.

pub mod types;

pub use types::*;
