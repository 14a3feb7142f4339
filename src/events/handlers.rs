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

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    App,
    api::ApiError,
    components::{TabKind, TrackDetail},
    model::{
        Track,
        session::Credentials,
        track_state::{TrackState, TrackStatus},
    },
    routes::{self, Route},
    tasks::AppTask,
};

/// Moves to `route`, or to wherever the guard redirects it.
///
/// Leaving a detail view releases its cover, and drops its pending fetch from
/// the request status. Entering one either shows the
/// stored track and asks for its cover, or asks for the track first.
pub(crate) fn navigate(app: &mut App, route: Route) -> Result<()> {
    let target = routes::resolve(&app.session.snapshot(), route.clone());
    if target != route {
        info!(?route, ?target, "Navigation redirected");
    } else {
        debug!(?target, "Navigate");
    }

    let keep_detail = matches!(
        (&target, &app.detail),
        (Route::TrackDetail(code), Some(detail)) if detail.is_for(code)
    );
    if !keep_detail {
        if let Some(mut detail) = app.detail.take() {
            if detail.needs_track() {
                app.track_state.set_status(TrackStatus::Idle);
            }
            detail.release();
        }
    }

    if let Route::TrackDetail(code) = &target {
        if app.detail.is_none() {
            let detail = TrackDetail::open(code, &app.track_state);
            let task = if detail.needs_track() {
                AppTask::LoadTrackDetail(code.clone())
            } else {
                AppTask::LoadCover(code.clone())
            };
            if detail.needs_track() {
                app.track_state.set_status(TrackStatus::Loading);
            }
            app.detail = Some(detail);
            app.task_tx.send(task)?;
        }
    }

    app.status_message = None;
    app.route = target;

    Ok(())
}

pub(super) fn handle_logout(app: &mut App) -> Result<()> {
    info!("Signing out");

    app.session.logout();
    app.track_state.clear();
    app.track_page.reset();
    app.login_page.reset();
    app.task_tx.send(AppTask::ClearCache)?;

    navigate(app, Route::Login)
}

pub(super) fn handle_login_completed(
    app: &mut App,
    credentials: Credentials,
    result: Result<(), ApiError>,
) -> Result<()> {
    if !app.login_page.is_loading() {
        debug!("Ignoring stale sign-in result");
        return Ok(());
    }

    app.login_page.complete(&result);
    if result.is_ok() {
        app.session.login(&credentials.username, &credentials.password);
        navigate(app, Route::Tracks)?;
    }

    Ok(())
}

pub(super) fn handle_track_looked_up(app: &mut App, code: String, result: Result<Track, ApiError>) {
    let tab = app.track_page.tab_mut(TabKind::Lookup);
    if !tab.is_awaiting(&code) {
        debug!(code, "Ignoring stale lookup result");
        return;
    }

    tab.complete(&result);
    record_outcome(&mut app.track_state, &result);
    if let Ok(track) = result {
        app.track_state.set_track_list(Some(vec![track]));
    }
}

pub(super) fn handle_track_registered(
    app: &mut App,
    code: String,
    result: Result<Track, ApiError>,
) -> Result<()> {
    let tab = app.track_page.tab_mut(TabKind::Register);
    if !tab.is_awaiting(&code) {
        debug!(code, "Ignoring stale registration result");
        return Ok(());
    }

    tab.complete(&result);
    record_outcome(&mut app.track_state, &result);
    if let Ok(track) = result {
        let route = Route::TrackDetail(track.isr_code.clone());
        app.track_state.set_track(Some(track));
        navigate(app, route)?;
    }

    Ok(())
}

pub(super) fn handle_detail_track_loaded(
    app: &mut App,
    code: String,
    result: Result<Track, ApiError>,
) -> Result<()> {
    let Some(detail) = app.detail.as_mut().filter(|d| d.is_for(&code) && d.needs_track()) else {
        debug!(code, "Ignoring track for a closed detail view");
        return Ok(());
    };

    record_outcome(&mut app.track_state, &result);
    if detail.track_loaded(result) {
        app.task_tx.send(AppTask::LoadCover(code))?;
    }

    Ok(())
}

pub(super) fn handle_cover_loaded(
    app: &mut App,
    code: String,
    result: Result<Arc<[u8]>, ApiError>,
) {
    match app.detail.as_mut().filter(|d| d.is_for(&code)) {
        Some(detail) => detail.cover_loaded(result),
        None => debug!(code, "Ignoring cover for a closed detail view"),
    }
}

fn record_outcome(track_state: &mut TrackState, result: &Result<Track, ApiError>) {
    track_state.set_status(match result {
        Ok(_) => TrackStatus::Idle,
        Err(_) => TrackStatus::Failed,
    });
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status_message = Some(message);
}
