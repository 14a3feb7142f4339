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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    components::{DetailAction, LoginAction, TabKind, TrackPageAction},
    events::{AppEvent, handlers::navigate},
    model::track_state::TrackStatus,
    routes::{self, Route},
    tasks::AppTask,
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Application Control**: Quitting and signing out, on every page.
/// * **Pages**: Everything else goes to the page the guard allows on
///   screen, which reports back what it wants done.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if a task fails to send to the background worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if process_global_key_event(app, key)? {
        return Ok(());
    }

    // A key press acknowledges whatever the status bar was showing
    app.status_message = None;

    let event = Event::Key(key);
    match routes::resolve(&app.session.snapshot(), app.route.clone()) {
        Route::Login => {
            if let Some(LoginAction::Submit) = app.login_page.process_event(&event) {
                if let Some(credentials) = app.login_page.begin() {
                    app.task_tx.send(AppTask::Login(credentials))?;
                }
            }
        }
        Route::Tracks => match app.track_page.process_event(&event) {
            Some(TrackPageAction::Submit(kind)) => {
                let task_tx = &app.task_tx;
                let submitted = app.track_page.tab_mut(kind).submit(|code| {
                    let task = match kind {
                        TabKind::Register => AppTask::RegisterTrack(code.to_string()),
                        TabKind::Lookup => AppTask::LookupTrack(code.to_string()),
                    };
                    task_tx.send(task)?;
                    Ok(())
                })?;

                if submitted {
                    if kind == TabKind::Register {
                        app.track_state.init_track();
                    }
                    app.track_state.set_status(TrackStatus::Loading);
                }
            }
            Some(TrackPageAction::OpenTrack(code)) => navigate(app, Route::TrackDetail(code))?,
            None => {}
        },
        Route::TrackDetail(_) => {
            let action = app.detail.as_mut().and_then(|detail| detail.process_event(&event));
            if let Some(DetailAction::Back) = action {
                navigate(app, Route::Tracks)?;
            }
        }
    }

    Ok(())
}

/// Keys that work everywhere, returns `true` if the key was consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            Ok(true)
        }
        (KeyCode::Char('o'), KeyModifiers::CONTROL) if app.session.is_authenticated() => {
            app.event_tx.send(AppEvent::Logout)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::config::AppConfig;

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    #[test]
    fn login_form_sends_probe() {
        let (mut app, task_rx) = app();

        type_str(&mut app, "user");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "pass");
        press(&mut app, KeyCode::Enter);

        match task_rx.try_recv() {
            Ok(AppTask::Login(credentials)) => {
                assert_eq!(credentials.username, "user");
                assert_eq!(credentials.password, "pass");
            }
            other => panic!("unexpected task {other:?}"),
        }
        assert!(!app.session.is_authenticated(), "the session waits for the probe");
    }

    #[test]
    fn empty_login_sends_nothing() {
        let (mut app, task_rx) = app();

        press(&mut app, KeyCode::Enter);

        assert!(task_rx.try_recv().is_err());
        assert_eq!(app.login_page.error(), Some("Username is required."));
    }

    #[test]
    fn register_form_sends_normalized_code() {
        let (mut app, task_rx) = app();
        app.session.login("user", "pass");
        app.route = Route::Tracks;

        type_str(&mut app, "  usrc17607839 ");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::RegisterTrack(code)) if code == "USRC17607839"
        ));
        assert!(app.track_page.tab(TabKind::Register).is_loading());
        assert_eq!(app.track_state.status(), TrackStatus::Loading);
    }

    #[test]
    fn tracks_page_is_guarded() {
        let (mut app, task_rx) = app();
        app.route = Route::Tracks;

        // Signed out, so keys go to the login form
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.login_page.username.value(), "abc");
        assert_eq!(app.track_page.tab(TabKind::Register).form.input.value(), "");
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut app, _task_rx) = app();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        process_key_event(&mut app, ctrl_c).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}
