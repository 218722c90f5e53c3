mod input;
mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{GameCommand, MenuInput};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tower_rpg::build_info;
use tower_rpg::{RunConfig, RunState, FRAME_MS};
use ui::menu_scene::{MainMenuScreen, MenuItem};

enum Screen {
    Menu,
    Options,
    Game,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Tower RPG - Turn-Based Tower Climb\n");
                println!("Usage: tower-rpg [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'tower-rpg --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let player_sprite = ui::sprites::player_sprite(ui::sprites::PLAYER_SPRITE_PATH);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &player_sprite);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("Goodbye!");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, player_sprite: &str) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let frame_time = Duration::from_millis(FRAME_MS);
    let options = RunConfig::default();

    let mut current_screen = Screen::Menu;
    let mut menu_screen = MainMenuScreen::new();
    let mut run: Option<RunState> = None;
    let mut last_frame = Instant::now();

    loop {
        match current_screen {
            Screen::Menu => {
                terminal.draw(|f| {
                    let area = f.size();
                    menu_screen.draw(f, area);
                })?;

                if event::poll(frame_time)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match input::map_menu_key(key_event.code) {
                            Some(MenuInput::Up) => menu_screen.move_up(),
                            Some(MenuInput::Down) => menu_screen.move_down(),
                            Some(MenuInput::Select) => match menu_screen.selected() {
                                MenuItem::Play => {
                                    run = Some(RunState::new(&mut rng));
                                    last_frame = Instant::now();
                                    current_screen = Screen::Game;
                                }
                                MenuItem::Options => current_screen = Screen::Options,
                                MenuItem::Quit => break,
                            },
                            Some(MenuInput::Quit) => break,
                            Some(MenuInput::Back) | None => {}
                        }
                    }
                }
            }

            Screen::Options => {
                terminal.draw(|f| {
                    let area = f.size();
                    ui::menu_scene::draw_options(f, area, &options);
                })?;

                if event::poll(frame_time)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match input::map_menu_key(key_event.code) {
                            Some(MenuInput::Select) | Some(MenuInput::Back) => {
                                current_screen = Screen::Menu;
                            }
                            Some(MenuInput::Quit) => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                let Some(state) = run.as_mut() else {
                    current_screen = Screen::Menu;
                    continue;
                };

                terminal.draw(|f| ui::battle_scene::draw_battle_scene(f, &*state, player_sprite))?;

                if event::poll(frame_time)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind == KeyEventKind::Press {
                            match input::map_game_key(key_event.code, state.phase) {
                                Some(GameCommand::Run(request)) => {
                                    state.process_input(request, &mut rng);
                                }
                                Some(GameCommand::LeaveToMenu) => {
                                    run = None;
                                    current_screen = Screen::Menu;
                                    continue;
                                }
                                None => {}
                            }
                        }
                    }
                }

                // Frame update: enemy timer and status countdown
                let elapsed = last_frame.elapsed();
                if elapsed >= frame_time {
                    state.tick(elapsed.as_millis() as u64, &mut rng);
                    state.update_frame();
                    last_frame = Instant::now();
                }

                if state.abandon_requested {
                    run = None;
                    current_screen = Screen::Menu;
                }
            }
        }
    }

    Ok(())
}
