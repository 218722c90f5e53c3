use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tower_rpg::RunConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Options,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Play, MenuItem::Options, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Options => "Options",
            Self::Quit => "Quit",
        }
    }
}

pub struct MainMenuScreen {
    pub selected_index: usize,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < MenuItem::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected_index.min(MenuItem::ALL.len() - 1)]
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(5), // Title
                Constraint::Min(5),    // Menu entries
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "TOWER RPG",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Climb twenty floors. Do not die.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let lines: Vec<Line> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.selected_index {
                    Line::from(Span::styled(
                        format!("> {} <", item.label()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::raw(item.label()))
                }
            })
            .collect();
        let menu = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Menu "))
            .alignment(Alignment::Center);
        f.render_widget(menu, chunks[1]);

        let controls = Paragraph::new("[Up/Down] Navigate  [Enter] Select  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(controls, chunks[2]);
    }
}

/// Read-only list of the rules a run is played with.
pub fn draw_options(f: &mut Frame, area: Rect, config: &RunConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{:<22}", label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(Color::Cyan)),
        ])
    };

    let lines = vec![
        Line::from(""),
        row("Floors", config.max_floor.to_string()),
        row("Starting potions", config.starting_potions.to_string()),
        row("Potion heal", format!("{} HP", config.potion_heal_amount)),
        row("Potion cap", config.potion_reward_cap.to_string()),
        row(
            "Heal between floors",
            format!("{:.0}% of max HP", config.floor_heal_fraction * 100.0),
        ),
        row(
            "Enemy turn delay",
            format!("{:.1}s", config.enemy_action_delay_ms as f64 / 1000.0),
        ),
        row("Attack variance", format!("+/-{}", config.attack_variance)),
    ];

    let options = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Options "))
        .alignment(Alignment::Left);
    f.render_widget(options, chunks[0]);

    let back = Paragraph::new(Line::from(Span::styled(
        "> Back <",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(back, chunks[1]);
}
