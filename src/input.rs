//! Key handling for the menu and battle screens.
//!
//! Translates crossterm key codes into discrete requests. Game rules stay in
//! `RunState`; this module only decides which request a key means in the
//! current phase.

use crossterm::event::KeyCode;
use tower_rpg::{Phase, PlayerAction, RunInput};

/// What a key press on the battle screen asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Run(RunInput),
    /// Leave a finished run and go back to the main menu
    LeaveToMenu,
}

/// Menu navigation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
    Back,
    Quit,
}

pub fn map_menu_key(code: KeyCode) -> Option<MenuInput> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuInput::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuInput::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuInput::Select),
        KeyCode::Esc | KeyCode::Backspace => Some(MenuInput::Back),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuInput::Quit),
        _ => None,
    }
}

/// Map a battle-screen key to a request for the given phase.
pub fn map_game_key(code: KeyCode, phase: Phase) -> Option<GameCommand> {
    if code == KeyCode::Esc && phase.pausable().is_some() {
        return Some(GameCommand::Run(RunInput::TogglePause));
    }

    let input = match phase {
        Phase::PlayerTurn => match code {
            KeyCode::Char('1') | KeyCode::Char('a') | KeyCode::Char('A') => {
                RunInput::Action(PlayerAction::Attack)
            }
            KeyCode::Char('2') | KeyCode::Char('d') | KeyCode::Char('D') => {
                RunInput::Action(PlayerAction::Defend)
            }
            KeyCode::Char('3') | KeyCode::Char('h') | KeyCode::Char('H') => {
                RunInput::Action(PlayerAction::Heal)
            }
            _ => return None,
        },
        Phase::VictoryOnFloor => match code {
            KeyCode::Char(c @ '1'..='4') => RunInput::ChooseReward(c as usize - '1' as usize),
            _ => return None,
        },
        Phase::Paused(_) => match code {
            KeyCode::Esc => RunInput::TogglePause,
            KeyCode::Char('r') | KeyCode::Char('R') => RunInput::Resume,
            KeyCode::Char('m') | KeyCode::Char('M') => RunInput::Abandon,
            _ => return None,
        },
        Phase::RunWon | Phase::RunLost => match code {
            KeyCode::Char(' ') => RunInput::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                return Some(GameCommand::LeaveToMenu)
            }
            _ => return None,
        },
        Phase::EnemyTurn => return None,
    };
    Some(GameCommand::Run(input))
}
