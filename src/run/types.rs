//! Run state machine data structures.

use serde::{Deserialize, Serialize};

/// A phase that can be interrupted by the pause overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PausedFrom {
    PlayerTurn,
    EnemyTurn,
    VictoryOnFloor,
}

impl PausedFrom {
    pub fn phase(self) -> Phase {
        match self {
            Self::PlayerTurn => Phase::PlayerTurn,
            Self::EnemyTurn => Phase::EnemyTurn,
            Self::VictoryOnFloor => Phase::VictoryOnFloor,
        }
    }
}

/// The single active state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player's action
    PlayerTurn,
    /// The enemy's delayed attack is pending
    EnemyTurn,
    /// Floor enemy defeated, waiting for a reward choice
    VictoryOnFloor,
    /// Tower cleared (terminal)
    RunWon,
    /// Player defeated (terminal)
    RunLost,
    /// Pause overlay, remembering the phase it interrupted
    Paused(PausedFrom),
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::RunWon | Self::RunLost)
    }

    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused(_))
    }

    /// Whether the floor's enemy is on screen in this phase.
    pub fn shows_enemy(self) -> bool {
        match self {
            Self::PlayerTurn | Self::EnemyTurn => true,
            Self::Paused(from) => from != PausedFrom::VictoryOnFloor,
            _ => false,
        }
    }

    /// The phase the pause overlay would interrupt, if pausable.
    pub fn pausable(self) -> Option<PausedFrom> {
        match self {
            Self::PlayerTurn => Some(PausedFrom::PlayerTurn),
            Self::EnemyTurn => Some(PausedFrom::EnemyTurn),
            Self::VictoryOnFloor => Some(PausedFrom::VictoryOnFloor),
            _ => None,
        }
    }
}

/// Actions available on the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    Defend,
    Heal,
}

/// Discrete requests delivered by the input layer, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunInput {
    Action(PlayerAction),
    /// Index into the offered reward menu
    ChooseReward(usize),
    TogglePause,
    Resume,
    Abandon,
    Restart,
}

/// How the state machine treated an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// State changed
    Applied,
    /// Accepted by the phase but refused for lack of resources; nothing changed
    /// except the status message
    Rejected,
    /// Not accepted in the current phase; nothing changed
    Ignored,
}

/// Run-level counters. Damage totals are statistics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub floor: u32,
    pub gold: u32,
    pub enemies_killed: u32,
    pub total_damage_dealt: u64,
    pub total_damage_taken: u64,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            floor: 1,
            gold: 0,
            enemies_killed: 0,
            total_damage_dealt: 0,
            total_damage_taken: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Won,
    Lost,
}

/// End-of-run statistics shown on the defeat and victory screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub outcome: Option<RunOutcome>,
    pub floor_reached: u32,
    pub enemies_killed: u32,
    pub gold: u32,
    pub total_damage_dealt: u64,
    pub total_damage_taken: u64,
}

/// Short-lived status line with a display countdown in frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub frames_remaining: u32,
}

impl StatusMessage {
    pub fn show(&mut self, text: impl Into<String>, frames: u32) {
        self.text = text.into();
        self.frames_remaining = frames;
    }

    /// Counts down one frame.
    pub fn tick(&mut self) {
        self.frames_remaining = self.frames_remaining.saturating_sub(1);
    }

    pub fn is_visible(&self) -> bool {
        self.frames_remaining > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::RunWon.is_terminal());
        assert!(Phase::RunLost.is_terminal());
        assert!(!Phase::PlayerTurn.is_terminal());
        assert!(!Phase::Paused(PausedFrom::EnemyTurn).is_terminal());
    }

    #[test]
    fn test_pausable_phases() {
        assert_eq!(Phase::PlayerTurn.pausable(), Some(PausedFrom::PlayerTurn));
        assert_eq!(Phase::EnemyTurn.pausable(), Some(PausedFrom::EnemyTurn));
        assert_eq!(
            Phase::VictoryOnFloor.pausable(),
            Some(PausedFrom::VictoryOnFloor)
        );
        assert_eq!(Phase::RunWon.pausable(), None);
        assert_eq!(Phase::RunLost.pausable(), None);
        assert_eq!(Phase::Paused(PausedFrom::PlayerTurn).pausable(), None);
    }

    #[test]
    fn test_paused_from_round_trips_phase() {
        for phase in [Phase::PlayerTurn, Phase::EnemyTurn, Phase::VictoryOnFloor] {
            let from = phase.pausable().unwrap();
            assert_eq!(from.phase(), phase);
        }
    }

    #[test]
    fn test_enemy_visibility() {
        assert!(Phase::PlayerTurn.shows_enemy());
        assert!(Phase::Paused(PausedFrom::EnemyTurn).shows_enemy());
        assert!(!Phase::VictoryOnFloor.shows_enemy());
        assert!(!Phase::Paused(PausedFrom::VictoryOnFloor).shows_enemy());
        assert!(!Phase::RunLost.shows_enemy());
    }

    #[test]
    fn test_status_message_countdown() {
        let mut status = StatusMessage::default();
        assert!(!status.is_visible());
        status.show("Hello", 2);
        assert!(status.is_visible());
        status.tick();
        status.tick();
        assert!(!status.is_visible());
        status.tick();
        assert_eq!(status.frames_remaining, 0);
        assert_eq!(status.text, "Hello");
    }

    #[test]
    fn test_run_stats_start_on_floor_one() {
        let stats = RunStats::default();
        assert_eq!(stats.floor, 1);
        assert_eq!(stats.gold, 0);
        assert_eq!(stats.enemies_killed, 0);
    }
}
