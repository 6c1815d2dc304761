// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished fetches)
// - Key dispatch to the active view

pub mod app;
pub mod clock;
pub mod components;
pub mod input;
pub mod layout;
pub mod router;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::satellites::sort::SortKey;
use crate::satellites::SatelliteClient;
use anyhow::{Context, Result};
use app::{App, RefreshOutcome};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use router::View;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, loads the satellites once, runs the event loop and
/// restores the terminal when done.
pub async fn run_tui(config: Config, client: SatelliteClient, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (refresh_tx, mut refresh_rx) = mpsc::channel(16);
    let mut app = App::new(&config, client, log_buffer, refresh_tx);

    // Fetch on mount
    app.refresh();

    let result = run_event_loop(&mut terminal, &mut app, &mut refresh_rx, config.tick_rate()).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources at once:
/// 1. Keyboard input
/// 2. Timer ticks (spinner, toast expiry, clock redraw)
/// 3. Finished fetches from background tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_rx: &mut mpsc::Receiver<RefreshOutcome>,
    tick_rate: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick_rate);
    let mut clock_rx = app.clock.subscribe();

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Mission clock advanced
            Ok(()) = clock_rx.changed() => {}

            // Fetch results
            Some((ticket, result)) = refresh_rx.recv() => {
                app.apply_refresh(ticket, result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Search box → Global → View-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }

    // Ctrl+C always quits
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Layer 1: search box captures text while active (no debounce for typing)
    if app.search_mode {
        handle_search_input(app, key_event.code);
        return;
    }

    if !app.handle_key_press(key_event.code) {
        return;
    }

    // Layer 2: global keys
    if handle_global_keys(app, key_event.code) {
        return;
    }

    // Layer 3: view keys
    match app.view() {
        View::Home => handle_home_keys(app, key_event.code),
        View::Dashboard => handle_dashboard_keys(app, key_event.code),
        View::History => handle_history_keys(app, key_event.code),
        View::Videos => handle_videos_keys(app, key_event.code),
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.search_mode = false,
        KeyCode::Esc => {
            app.history.set_search("");
            app.search_mode = false;
        }
        KeyCode::Backspace => app.history.pop_search_char(),
        KeyCode::Char(c) => app.history.push_search_char(c),
        // Leave search with a view switch
        KeyCode::Tab | KeyCode::BackTab | KeyCode::F(_) => {
            app.search_mode = false;
            handle_global_keys(app, key);
        }
        _ => {}
    }
}

/// Global keys work the same regardless of current view
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),
        KeyCode::F(n @ 1..=4) => {
            if let Some(view) = View::from_hotkey(n) {
                app.navigate(view);
            }
        }
        KeyCode::Char('r') | KeyCode::F(5) => app.refresh(),
        KeyCode::Char('x') => app.dismiss_error(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('l') => app.show_logs = !app.show_logs,
        _ => return false,
    }
    true
}

fn handle_home_keys(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.navigate(View::Dashboard);
    }
}

fn handle_dashboard_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Char('m') => app.metric = app.metric.next(),
        KeyCode::Left => app.metric = app.metric.prev(),
        _ => {}
    }
}

fn handle_history_keys(app: &mut App, key: KeyCode) {
    let satellites = app.satellites();
    let records = satellites.as_slice();

    match key {
        KeyCode::Char('/') => app.search_mode = true,
        KeyCode::Char('o') => app.history.cycle_orbit_type(records, true),
        KeyCode::Char('O') => app.history.cycle_orbit_type(records, false),
        KeyCode::Char('s') => app.history.cycle_status(records, true),
        KeyCode::Char('S') => app.history.cycle_status(records, false),
        KeyCode::Char('c') | KeyCode::Esc => app.history.clear_filters(),
        KeyCode::Char(d @ '1'..='4') => {
            let idx = d as usize - '1' as usize;
            app.history.sort_by(SortKey::ALL[idx]);
        }
        KeyCode::Right | KeyCode::PageDown => app.history.next_page(records),
        KeyCode::Left | KeyCode::PageUp => app.history.prev_page(),
        KeyCode::Home => app.history.first_page(),
        KeyCode::End => app.history.last_page(records),
        _ => {}
    }
}

fn handle_videos_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.videos.next(),
        KeyCode::Up | KeyCode::Char('k') => app.videos.prev(),
        KeyCode::Char('y') => app.copy_feed_url(),
        KeyCode::Char(d @ '1'..='9') => {
            let idx = d as usize - '1' as usize;
            if let Some(id) = app.videos.feeds().get(idx).map(|feed| feed.id) {
                app.videos.select(id);
            }
        }
        _ => {}
    }
}
