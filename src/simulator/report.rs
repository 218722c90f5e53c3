//! Simulation report generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::runner::SimRunResult;
use crate::run::RunOutcome;

/// Aggregated results from multiple simulated runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_won: u32,
    pub runs_lost: u32,
    /// Runs that hit the action cap without ending
    pub runs_stalled: u32,
    pub win_rate: f64,

    pub avg_floor_reached: f64,
    pub avg_gold: f64,
    pub avg_kills: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_taken: f64,

    /// Floor -> number of runs that died there
    pub floor_of_death: BTreeMap<u32, u32>,

    pub runs: Vec<SimRunResult>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<SimRunResult>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let count = |outcome: Option<RunOutcome>| {
            runs.iter().filter(|r| r.outcome == outcome).count() as u32
        };
        let runs_won = count(Some(RunOutcome::Won));
        let runs_lost = count(Some(RunOutcome::Lost));
        let runs_stalled = count(None);

        let avg = |f: fn(&SimRunResult) -> f64| runs.iter().map(f).sum::<f64>() / divisor;
        let avg_floor_reached = avg(|r| r.floor_reached as f64);
        let avg_gold = avg(|r| r.gold as f64);
        let avg_kills = avg(|r| r.enemies_killed as f64);
        let avg_damage_dealt = avg(|r| r.damage_dealt as f64);
        let avg_damage_taken = avg(|r| r.damage_taken as f64);

        let mut floor_of_death = BTreeMap::new();
        for run in runs
            .iter()
            .filter(|r| r.outcome == Some(RunOutcome::Lost))
        {
            *floor_of_death.entry(run.floor_reached).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_won,
            runs_lost,
            runs_stalled,
            win_rate: runs_won as f64 / divisor,
            avg_floor_reached,
            avg_gold,
            avg_kills,
            avg_damage_dealt,
            avg_damage_taken,
            floor_of_death,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  TOWER SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} won, {} lost, {} stalled\n",
            self.num_runs, self.runs_won, self.runs_lost, self.runs_stalled
        ));
        report.push_str(&format!("Win rate: {:.1}%\n\n", self.win_rate * 100.0));

        report.push_str("── AVERAGES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Floor Reached:   {:.1}\n", self.avg_floor_reached));
        report.push_str(&format!("  Gold:            {:.0}\n", self.avg_gold));
        report.push_str(&format!("  Kills:           {:.1}\n", self.avg_kills));
        report.push_str(&format!("  Damage Dealt:    {:.0}\n", self.avg_damage_dealt));
        report.push_str(&format!("  Damage Taken:    {:.0}\n\n", self.avg_damage_taken));

        report.push_str("── FLOOR OF DEATH ───────────────────────────────────────────────\n");
        if self.floor_of_death.is_empty() {
            report.push_str("  (no deaths)\n");
        }
        for (floor, deaths) in &self.floor_of_death {
            let pct = (*deaths as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Floor {:2}: {:>5.1}% {}\n", floor, pct, bar));
        }

        report
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
