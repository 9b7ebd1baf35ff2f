//! Terminal User Interface for housecount
//!
//! An interactive explorer for the character dataset.
//! Features:
//! - Bar charts for houses, species, and blood status
//! - Per-region selections with a drill-down detail panel
//! - Patronus assigner modal
//! - Auto-refresh when the dataset file changes

pub mod app;
pub mod msg; // TEA message types (what happened)
pub mod state; // Pure state transformations (functional core)
pub mod ui;
pub mod update; // TEA update function (state transitions)
pub mod views;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::prelude::*;

use crate::config::Config;

use app::App;
use msg::key_to_msg;

/// Run the TUI application
pub fn run(config: &Config, data_override: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app, ensuring cleanup happens even on error
    let result = run_app_inner(&mut terminal, config, data_override);

    // Restore terminal - this MUST run even if app fails
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}

fn run_app_inner<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    data_override: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create app state
    let mut app = App::new(config, data_override)?;

    // Setup file watcher for auto-refresh
    let (tx, rx) = mpsc::channel();
    let data_path_for_watcher = app.data_path().to_path_buf();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                if event.kind.is_modify() {
                    let _ = tx.send(());
                }
            }
        },
        notify::Config::default(),
    )?;

    // Watch the dataset file
    watcher.watch(&data_path_for_watcher, RecursiveMode::NonRecursive)?;

    // Run the main loop
    run_event_loop(terminal, &mut app, rx)
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    file_change_rx: mpsc::Receiver<()>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // Draw the UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle input with timeout
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if poll(timeout)? {
            match read()? {
                Event::Key(key) => {
                    let msg = key_to_msg(
                        key.code,
                        key.modifiers,
                        app.model.patronus_open,
                        app.model.help_open,
                    );
                    if app.handle_msg(msg) {
                        return Ok(()); // Quit signal
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Resize(width, height) => {
                    app.resize(width, height);
                }
                _ => {}
            }
        }

        // Check for dataset changes (non-blocking)
        if file_change_rx.try_recv().is_ok() {
            app.reload_data();
        }

        // Tick for status expiry
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
