use super::centered_rect;
use super::sprites::{enemy_sprite, terminal_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};
use tower_rpg::run::{RunOutcome, RunSummary};
use tower_rpg::{Phase, RunState};

/// Draws the whole battle screen for the current run.
pub fn draw_battle_scene(frame: &mut Frame, run: &RunState, player_sprite: &str) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Floor header
            Constraint::Min(10),   // Arena
            Constraint::Length(3), // Status line
            Constraint::Length(8), // Log + actions
        ])
        .split(area);

    draw_header(frame, chunks[0], run);

    let arena = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_player_panel(frame, arena[0], run, player_sprite);
    draw_enemy_panel(frame, arena[1], run);

    draw_status(frame, chunks[2], run);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    draw_combat_log(frame, bottom[0], run);
    draw_actions(frame, bottom[1], run);

    if run.phase.is_paused() {
        draw_pause_overlay(frame, area);
    } else if run.phase.is_terminal() {
        draw_summary_overlay(frame, area, &run.summary());
    }
}

fn draw_header(frame: &mut Frame, area: Rect, run: &RunState) {
    let floor = run.stats.floor.min(run.config.max_floor);
    let line = Line::from(vec![
        Span::styled(
            format!("Floor {}/{}", floor, run.config.max_floor),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Gold: {}", run.stats.gold),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Kills: {}", run.stats.enemies_killed),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Potions: {}", run.potions),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Tower "))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn hp_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_player_panel(frame: &mut Frame, area: Rect, run: &RunState, player_sprite: &str) {
    let player = &run.player;
    let title = if player.is_defending {
        format!(" {} [Defending] ", player.name)
    } else {
        format!(" {} ", player.name)
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let sprite = Paragraph::new(player_sprite.to_string())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(sprite, chunks[0]);

    let stats = Paragraph::new(format!("ATK {}  DEF {}", player.attack, player.defense))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(stats, chunks[1]);

    let ratio = player.hp_ratio();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(hp_color(ratio)).add_modifier(Modifier::BOLD))
        .label(format!("HP: {}/{}", player.current_hp, player.max_hp))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, chunks[2]);
}

fn draw_enemy_panel(frame: &mut Frame, area: Rect, run: &RunState) {
    let enemy = run
        .current_enemy
        .as_ref()
        .filter(|_| run.phase.shows_enemy());

    let Some(enemy) = enemy else {
        let text = match run.phase {
            Phase::RunWon => "The tower is silent.",
            Phase::RunLost => "",
            _ => "Floor cleared!",
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(Block::default().borders(Borders::ALL).title(" Enemy "))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    };

    let color = terminal_color(enemy.color());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", enemy.name()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let sprite = Paragraph::new(enemy_sprite(enemy.archetype))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(sprite, chunks[0]);

    let stats = Paragraph::new(format!(
        "ATK {}  DEF {}",
        enemy.combatant.attack, enemy.combatant.defense
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(stats, chunks[1]);

    let ratio = enemy.combatant.hp_ratio();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!(
            "HP: {}/{}",
            enemy.combatant.current_hp, enemy.combatant.max_hp
        ))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, chunks[2]);
}

fn draw_status(frame: &mut Frame, area: Rect, run: &RunState) {
    let line = if run.status.is_visible() {
        Line::from(Span::styled(
            run.status.text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let (text, color) = match run.phase {
            Phase::PlayerTurn => ("Your turn".to_string(), Color::Green),
            Phase::EnemyTurn => {
                let name = run.current_enemy.as_ref().map(|e| e.name()).unwrap_or("Enemy");
                (format!("{} is preparing to strike...", name), Color::Red)
            }
            Phase::VictoryOnFloor => ("Choose your reward".to_string(), Color::Yellow),
            Phase::Paused(_) => ("Paused".to_string(), Color::DarkGray),
            Phase::RunWon | Phase::RunLost => (String::new(), Color::White),
        };
        Line::from(Span::styled(text, Style::default().fg(color)))
    };

    let status = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn draw_combat_log(frame: &mut Frame, area: Rect, run: &RunState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Combat ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Newest first
    let lines: Vec<Line> = run
        .combat_log
        .iter()
        .rev()
        .take(inner.height as usize)
        .map(|entry| {
            let color = if entry.is_player_action {
                Color::Green
            } else {
                Color::Red
            };
            let style = if entry.is_critical_event {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            Line::from(Span::styled(entry.message.clone(), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_actions(frame: &mut Frame, area: Rect, run: &RunState) {
    let key = |k: &str| {
        Span::styled(
            format!("[{}] ", k),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let (title, lines) = match run.phase {
        Phase::VictoryOnFloor => {
            let lines: Vec<Line> = run
                .reward_options()
                .iter()
                .enumerate()
                .map(|(i, reward)| {
                    Line::from(vec![key(&(i + 1).to_string()), Span::raw(reward.label())])
                })
                .collect();
            (" Reward ", lines)
        }
        Phase::EnemyTurn => (
            " Actions ",
            vec![
                Line::from(Span::styled(
                    "Waiting for the enemy...",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(vec![key("Esc"), Span::raw("Pause")]),
            ],
        ),
        Phase::RunWon | Phase::RunLost => (
            " Actions ",
            vec![
                Line::from(vec![key("Space"), Span::raw("New run")]),
                Line::from(vec![key("M"), Span::raw("Main menu")]),
            ],
        ),
        _ => (
            " Actions ",
            vec![
                Line::from(vec![key("1/A"), Span::raw("Attack")]),
                Line::from(vec![key("2/D"), Span::raw("Defend")]),
                Line::from(vec![
                    key("3/H"),
                    Span::raw(format!("Potion ({})", run.potions)),
                ]),
                Line::from(vec![key("Esc"), Span::raw("Pause")]),
            ],
        ),
    };

    let actions = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(actions, area);
}

fn draw_pause_overlay(frame: &mut Frame, area: Rect) {
    let dialog = centered_rect(area, 36, 9);
    frame.render_widget(Clear, dialog);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("[R] / [Esc]  Resume"),
        Line::from("[M]          Abandon run"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Pause "),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, dialog);
}

fn draw_summary_overlay(frame: &mut Frame, area: Rect, summary: &RunSummary) {
    let dialog = centered_rect(area, 44, 13);
    frame.render_widget(Clear, dialog);

    let (headline, color) = match summary.outcome {
        Some(RunOutcome::Won) => ("VICTORY! The tower is yours.", Color::Yellow),
        _ => ("DEFEAT", Color::Red),
    };

    let stat = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        stat("Floor reached", summary.floor_reached.to_string()),
        stat("Enemies slain", summary.enemies_killed.to_string()),
        stat("Gold", summary.gold.to_string()),
        stat("Damage dealt", summary.total_damage_dealt.to_string()),
        stat("Damage taken", summary.total_damage_taken.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] New run   [M] Menu",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(" Run Over "),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, dialog);
}
