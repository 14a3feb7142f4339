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

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Key presses, task results from the worker and periodic ticks
//! all arrive as [`AppEvent`]s on one channel and are applied to the [`App`]
//! state here, one at a time, on the UI thread.
//!
//! # Organization
//!
//! * [`key_handlers`]: Routes key presses to the page on screen.
//! * [`handlers`]: Applies navigation and task results to the state.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::Arc};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    api::ApiError,
    model::{Track, session::Credentials},
    render::draw,
    routes::Route,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Navigate(Route),
    Logout,

    LoginCompleted(Credentials, Result<(), ApiError>),

    TrackLookedUp(String, Result<Track, ApiError>),
    TrackRegistered(String, Result<Track, ApiError>),

    DetailTrackLoaded(String, Result<Track, ApiError>),
    CoverLoaded(String, Result<Arc<[u8]>, ApiError>),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Navigate(route) => navigate(app, route)?,
        AppEvent::Logout => handle_logout(app)?,
        AppEvent::LoginCompleted(credentials, result) => {
            handle_login_completed(app, credentials, result)?
        }
        AppEvent::TrackLookedUp(code, result) => handle_track_looked_up(app, code, result),
        AppEvent::TrackRegistered(code, result) => handle_track_registered(app, code, result)?,
        AppEvent::DetailTrackLoaded(code, result) => handle_detail_track_loaded(app, code, result)?,
        AppEvent::CoverLoaded(code, result) => handle_cover_loaded(app, code, result),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}
