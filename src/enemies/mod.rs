//! Enemy archetypes and floor-based generation.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
