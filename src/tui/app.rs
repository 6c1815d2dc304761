// TUI application state
//
// Owns the satellite store and every piece of view state. All mutation happens
// on the event loop; background fetches only report back through `refresh_tx`.

use super::clock::MissionClock;
use super::components::Toast;
use super::input::InputHandler;
use super::router::{View, ViewRouter};
use super::theme::Theme;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::satellites::{
    DataStore, FetchError, HistoryState, Metric, RefreshTicket, SatelliteClient, SatelliteRecord,
    Snapshot,
};
use crate::videos::VideoCatalog;
use anyhow::Context;
use crossterm::event::KeyCode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A finished fetch on its way back to the event loop
pub type RefreshOutcome = (RefreshTicket, Result<Vec<SatelliteRecord>, FetchError>);

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Main application state for the TUI
pub struct App {
    pub store: DataStore,
    pub router: ViewRouter,
    pub history: HistoryState,
    pub metric: Metric,
    pub videos: VideoCatalog,
    pub clock: MissionClock,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub toast: Option<Toast>,

    /// Keystrokes go to the history search box
    pub search_mode: bool,
    pub show_logs: bool,
    pub should_quit: bool,
    pub start_time: Instant,

    client: SatelliteClient,
    refresh_tx: mpsc::Sender<RefreshOutcome>,
    input_handler: InputHandler,
    spinner_frame: usize,
}

impl App {
    /// Build the app. Must be called inside a tokio runtime (the clock spawns).
    pub fn new(
        config: &Config,
        client: SatelliteClient,
        log_buffer: LogBuffer,
        refresh_tx: mpsc::Sender<RefreshOutcome>,
    ) -> Self {
        Self {
            store: DataStore::new(),
            router: ViewRouter::new(),
            history: HistoryState::new(),
            metric: Metric::default(),
            videos: VideoCatalog::new(),
            clock: MissionClock::mount(),
            theme: Theme::by_name(&config.theme),
            log_buffer,
            toast: None,
            search_mode: false,
            show_logs: true,
            should_quit: false,
            start_time: Instant::now(),
            client,
            refresh_tx,
            input_handler: InputHandler::default(),
            spinner_frame: 0,
        }
    }

    pub fn view(&self) -> View {
        self.router.current()
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.store.snapshot()
    }

    /// Shared handle on the current collection
    pub fn satellites(&self) -> Arc<Vec<SatelliteRecord>> {
        Arc::clone(&self.store.snapshot().satellites)
    }

    pub fn client(&self) -> &SatelliteClient {
        &self.client
    }

    // ─────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────

    /// Kick off a fetch; the result comes back through the refresh channel
    pub fn refresh(&mut self) {
        let ticket = self.store.begin_refresh();
        let client = self.client.clone();
        let tx = self.refresh_tx.clone();

        tokio::spawn(async move {
            let result = client.fetch_satellites().await;
            if tx.send((ticket, result)).await.is_err() {
                tracing::debug!("Refresh #{} finished after shutdown", ticket.sequence());
            }
        });
    }

    /// Apply a finished fetch. Returns false when it was superseded.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<SatelliteRecord>, FetchError>,
    ) -> bool {
        let applied = self.store.complete(ticket, result);
        if applied {
            let satellites = self.satellites();
            self.history.sync_with(&satellites);
        }
        applied
    }

    pub fn dismiss_error(&mut self) {
        self.store.dismiss_error();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    pub fn navigate(&mut self, view: View) {
        self.search_mode = false;
        if self.router.navigate(view) {
            self.refresh();
        }
    }

    pub fn next_view(&mut self) {
        self.navigate(self.view().next());
    }

    pub fn prev_view(&mut self) {
        self.navigate(self.view().prev());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Misc actions
    // ─────────────────────────────────────────────────────────────────────

    pub fn cycle_theme(&mut self) {
        self.theme = Theme::from_kind(self.theme.kind.next());
        self.show_toast(Toast::new(format!("Theme: {}", self.theme.name())));
    }

    /// Copy the selected feed's URL so it can be opened in a browser
    pub fn copy_feed_url(&mut self) {
        let (id, url) = (self.videos.current().id, self.videos.current().url);
        match copy_to_clipboard(url) {
            Ok(()) => {
                tracing::info!("Copied {} URL to clipboard", id);
                self.show_toast(Toast::new("Feed URL copied"));
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast(Toast::error("Clipboard unavailable"));
            }
        }
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input & timing
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.release(key);
    }

    /// Called on every timer tick
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.spinner_frame]
    }

    /// Uptime as `HH:MM:SS`
    pub fn uptime(&self) -> String {
        format_duration(self.start_time.elapsed())
    }
}

fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
