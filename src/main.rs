// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Music Tracker TUI.
//!
//! A terminal client for the music tracker backend: sign in, register tracks
//! by ISRC code, look up stored tracks and view their details and cover art.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** performs the blocking HTTP requests against the
//!   backend, one at a time, through a response cache.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels,
//! and the only state they share is the session store.

mod api;
mod components;
mod config;
mod events;
mod model;
mod render;
mod routes;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    api::{TrackService, TrackerClient},
    components::{LoginPage, TrackDetail, TrackPage},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{session::SessionStore, track_state::TrackState},
    routes::Route,
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub route: Route,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub session: SessionStore,
    pub track_state: TrackState,

    pub login_page: LoginPage,
    pub track_page: TrackPage,
    pub detail: Option<TrackDetail>,

    pub status_message: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            route: Route::Login,
            event_tx,
            event_rx,
            task_tx,
            session: SessionStore::new(),
            track_state: TrackState::new(),
            login_page: LoginPage::new(),
            track_page: TrackPage::new(),
            detail: None,
            status_message: None,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the backend service, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let log_file = util::logging::init_logging()?;

    let config = config::load_config();

    let client = TrackerClient::new(&config.base_url).context("Failed to create HTTP client")?;
    info!(api_url = client.api_url(), log_file = %log_file.display(), "Starting");
    let service = TrackService::new(client);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, service, task_rx);
    restore_terminal(&mut terminal);

    if let Some(mut detail) = app.detail.take() {
        detail.release();
    }

    info!("Exiting");
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(colour) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&colour);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s against the backend.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: TrackService,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(service, app.session.clone(), task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Press && tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
