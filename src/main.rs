//! signup-tui - account creation form for the terminal
//!
//! A Ratatui-based TUI with live field validation, a single-flight submit
//! action and toast notifications.

mod app;
mod config;
mod notify;
mod platform;
mod state;
mod submit;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
        AppConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file; stdout and stderr belong to the alternate screen
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "signup_tui=info".into());

    match open_log_file() {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        // No log file means no logs rather than output over the UI
        None => tracing_subscriber::registry().with(filter).init(),
    }
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let path = AppConfig::log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling while toasts slide in or a submission runs (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if app.is_animating(now) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.quit();
                } else {
                    app.handle_key(key);
                }
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
