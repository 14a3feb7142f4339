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
use tracing::{info, warn};

use crate::{
    api::ApiError,
    events::AppEvent,
    model::session::Credentials,
    tasks::TaskContext,
};

pub(super) fn login(ctx: &mut TaskContext, credentials: Credentials) -> Result<()> {
    let result = ctx.service.probe_login(&credentials);
    match &result {
        Ok(()) => info!(username = %credentials.username, "Sign-in accepted"),
        Err(e) => log_failure("login", e),
    }
    ctx.event_tx.send(AppEvent::LoginCompleted(credentials, result))?;

    Ok(())
}

pub(super) fn clear_cache(ctx: &mut TaskContext) -> Result<()> {
    let cached = ctx.service.cached_len();
    ctx.service.clear();
    info!(cached, "Response cache cleared");

    Ok(())
}

pub(super) fn lookup_track(ctx: &mut TaskContext, code: String) -> Result<()> {
    let credentials = ctx.credentials();
    let result = ctx.service.get_track(credentials.as_ref(), &code);
    if let Err(e) = &result {
        log_failure("lookup", e);
    }
    ctx.event_tx.send(AppEvent::TrackLookedUp(code, result))?;

    Ok(())
}

pub(super) fn register_track(ctx: &mut TaskContext, code: String) -> Result<()> {
    let credentials = ctx.credentials();
    let result = ctx.service.register_track(credentials.as_ref(), &code);
    if let Err(e) = &result {
        log_failure("register", e);
    }
    ctx.event_tx.send(AppEvent::TrackRegistered(code, result))?;

    Ok(())
}

pub(super) fn load_track_detail(ctx: &mut TaskContext, code: String) -> Result<()> {
    let credentials = ctx.credentials();
    let result = ctx.service.get_track(credentials.as_ref(), &code);
    ctx.event_tx.send(AppEvent::DetailTrackLoaded(code, result))?;

    Ok(())
}

pub(super) fn load_cover(ctx: &mut TaskContext, code: String) -> Result<()> {
    let credentials = ctx.credentials();
    let result = ctx.service.get_cover(credentials.as_ref(), &code);
    ctx.event_tx.send(AppEvent::CoverLoaded(code, result))?;

    Ok(())
}

fn log_failure(operation: &str, err: &ApiError) {
    match err {
        ApiError::Network { cause } => warn!(operation, cause = %cause, "Backend unreachable"),
        other => info!(operation, status = ?other.status(), "Request rejected: {other}"),
    }
}
