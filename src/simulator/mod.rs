//! Balance simulator for Monte Carlo analysis of the tower.
//!
//! Plays many scripted runs through the real `RunState` state machine to see
//! how far a reasonable player gets and where runs end.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{choose_action, choose_reward, run_simulation, simulate_single_run, SimRunResult};
