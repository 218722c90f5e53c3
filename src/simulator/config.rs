//! Simulation configuration.

use crate::core::config::RunConfig;

/// Configuration for a batch of simulated runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to play
    pub runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = entropy)
    pub seed: Option<u64>,

    /// Safety cap on inputs per run before it is counted as stalled
    pub max_actions_per_run: u32,

    /// Rules each run is played with
    pub run_config: RunConfig,

    /// Print one line per finished run
    pub verbose: bool,

    /// Emit the report as JSON instead of text
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: Some(42),
            max_actions_per_run: 10_000,
            run_config: RunConfig::default(),
            verbose: false,
            json: false,
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for tests.
    pub fn quick(runs: u32, seed: u64) -> Self {
        Self {
            runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
