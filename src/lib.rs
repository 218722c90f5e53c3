//! Tower RPG - turn-based roguelike tower climb.
//!
//! This module exposes the game logic for testing and external use. The
//! terminal frontend lives in the `tower-rpg` binary.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod rewards;
pub mod run;
pub mod simulator;

pub use crate::combat::Combatant;
pub use crate::core::config::RunConfig;
pub use crate::core::constants::*;
pub use crate::enemies::{Archetype, Enemy};
pub use crate::rewards::Reward;
pub use crate::run::{InputOutcome, Phase, PlayerAction, RunInput, RunState};
