//! Stonebound - Entry Point
//!
//! Initializes the terminal, sets up the game and runs the main loop.

use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stonebound::config::GameConfig;
use stonebound::data::DataManager;
use stonebound::game::GameController;
use stonebound::ui::App;

fn main() -> Result<()> {
    let (config, config_warning) = GameConfig::load();
    init_logging(&config);
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }
    log::info!("Starting Stonebound v{}", env!("CARGO_PKG_VERSION"));

    let data = DataManager::load(&config.data_dir);
    let mut game = GameController::new(data).context("failed to generate the caves")?;
    let mut app = App::new(config.hold_ticks);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let frame_time = Duration::from_millis(config.frame_millis());
    let result = run_game_loop(&mut terminal, &mut app, &mut game, frame_time);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Stonebound shut down cleanly");
    result
}

/// Log to a file so output does not tear through the TUI
fn init_logging(config: &GameConfig) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter));
    match OpenOptions::new().create(true).write(true).truncate(true).open(&config.log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // Nowhere to write; stay quiet rather than draw over the screen
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

/// Main game loop
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    game: &mut GameController,
    frame_time: Duration,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        // Drain every key that arrived since the last frame
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_input(key, game)? {
                    return Ok(());
                }
            }
        }

        app.tick(game);

        terminal.draw(|frame| {
            app.render(frame, game);
        })?;

        // Frame rate limiting
        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }
}
