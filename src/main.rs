//! Contact Form - terminal contact form
//!
//! A Ratatui-based form with live field validation, phone number masking,
//! rating sliders and a summary of each successful submission.

mod app;
mod config;
mod platform;
mod sink;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::FormConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_logging();

    let config = match FormConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            FormConfig::default()
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app);

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

/// Send logs to a file; the terminal itself is owned by the UI
fn init_logging() {
    let log_file = FormConfig::log_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        File::options()
            .create(true)
            .append(true)
            .open(dir.join("contact-form.log"))
            .ok()
    });

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "contact_form=info".into());

    match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init(),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Faster polling while the confirmation animates (16ms = ~60fps)
        let poll_duration = if app.state.notifier.is_visible() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key, Instant::now())?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
