use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use todo_tui::config::AppConfig;
use todo_tui::core::{logging, AppController};
use todo_tui::error::{self, Error};
use todo_tui::tui::App;

#[tokio::main]
async fn main() -> miette::Result<()> {
    error::install_report_handler();

    // Config first: it decides where logs go
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _log_guard = logging::init_tui(&config.log_dir(), &config.log.level);
    log::info!("{} v{} starting", todo_tui::NAME, todo_tui::VERSION);
    match config_error {
        Some(e) => log::warn!("{e}; using defaults"),
        None => log::info!("Using config from {}", AppConfig::config_path().display()),
    }

    let controller = AppController::new(config.todo.initial_name.clone(), Box::new(config.clock()));
    let mut app = App::new(controller);

    run(&mut app, Duration::from_millis(config.tui.tick_rate_ms)).await?;
    Ok(())
}

async fn run(app: &mut App, tick_rate: Duration) -> Result<(), Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Event loop failed: {e}");
    }
    result.map_err(Error::from)
}
