//! Pause overlay and run abandonment.
//!
//! Pausing freezes the enemy-turn countdown instead of cancelling it, so a
//! pending enemy attack still lands exactly once after resuming.

use super::logic::RunState;
use super::types::{InputOutcome, Phase};

impl RunState {
    /// Esc: pause a running phase, or resume if already paused.
    pub fn toggle_pause(&mut self) -> InputOutcome {
        if self.phase.is_paused() {
            return self.resume();
        }
        match self.phase.pausable() {
            Some(from) => {
                self.enemy_timer.suspend();
                self.phase = Phase::Paused(from);
                InputOutcome::Applied
            }
            None => InputOutcome::Ignored,
        }
    }

    /// Return to exactly the phase the pause interrupted.
    pub fn resume(&mut self) -> InputOutcome {
        let Phase::Paused(from) = self.phase else {
            return InputOutcome::Ignored;
        };
        if self.abandon_requested {
            return InputOutcome::Ignored;
        }
        self.phase = from.phase();
        self.enemy_timer.resume();
        InputOutcome::Applied
    }

    /// Ask the owning shell to discard this run. Only from the pause menu.
    pub fn abandon(&mut self) -> InputOutcome {
        if !self.phase.is_paused() || self.abandon_requested {
            return InputOutcome::Ignored;
        }
        self.enemy_timer.cancel();
        self.abandon_requested = true;
        InputOutcome::Applied
    }

    pub fn is_paused(&self) -> bool {
        self.phase.is_paused()
    }
}
