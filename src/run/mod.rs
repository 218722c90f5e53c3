//! Run state machine: turns, rewards, floors, pause and restart.

pub mod logic;
pub mod session;
pub mod timer;
pub mod types;

pub use logic::RunState;
pub use timer::{EnemyTurnTimer, TimerHandle};
pub use types::*;
