//! Core constants, configuration and combat math.

pub mod combat_math;
pub mod config;
pub mod constants;

pub use config::RunConfig;
pub use constants::*;
