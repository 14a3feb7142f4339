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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking
//! backend requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppTask`] requests into calls on the cached
//! [`TrackService`] and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Tasks are handled one at a time, in the order they were sent. A repeated
//! request for a key that has already been answered is served from the
//! service cache, so identical queries never overlap on the wire.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{debug, error};

use crate::{
    api::TrackService,
    events::AppEvent,
    model::session::{Credentials, SessionStore},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Probe the backend with credentials that are not stored yet.
    Login(Credentials),
    /// Forget every cached response.
    ClearCache,

    LookupTrack(String),
    RegisterTrack(String),

    LoadTrackDetail(String),
    LoadCover(String),
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the [`TrackService`] and reads credentials from the
/// shared [`SessionStore`] for every request, it never changes the session
/// itself.
///
/// # Arguments
///
/// * `service` - The cached backend service.
/// * `session` - Handle to the session store.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    service: TrackService,
    session: SessionStore,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = service;

        while let Ok(task) = task_rx.recv() {
            debug!(?task, "Processing task");

            let mut ctx = TaskContext {
                service: &mut service,
                session: &session,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                error!("Task failed: {e:#}");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        debug!("Task channel closed, worker exiting");
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    service: &'a mut TrackService,
    session: &'a SessionStore,
    event_tx: &'a Sender<AppEvent>,
}

impl TaskContext<'_> {
    fn credentials(&self) -> Option<Credentials> {
        self.session.credentials()
    }
}

/// Orchestrates the execution of a single task.
///
/// Backend failures are results, not errors: they travel back inside the
/// event. Only a closed event channel makes a task fail.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::Login(credentials) => login(ctx, credentials),
        AppTask::ClearCache => clear_cache(ctx),

        AppTask::LookupTrack(code) => lookup_track(ctx, code),
        AppTask::RegisterTrack(code) => register_track(ctx, code),

        AppTask::LoadTrackDetail(code) => load_track_detail(ctx, code),
        AppTask::LoadCover(code) => load_cover(ctx, code),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::*;
    use crate::api::{ApiError, TrackerClient};

    // Nothing listens on port 1, every request fails to connect
    fn worker() -> (Sender<AppTask>, Receiver<AppEvent>, SessionStore) {
        let client = TrackerClient::new("http://127.0.0.1:1/tracker").unwrap();
        let session = SessionStore::new();
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        spawn_task_worker(TrackService::new(client), session.clone(), task_rx, event_tx);

        (task_tx, event_rx, session)
    }

    fn next_event(event_rx: &Receiver<AppEvent>) -> AppEvent {
        event_rx.recv_timeout(Duration::from_secs(10)).unwrap()
    }

    #[test]
    fn lookup_failure_is_reported_with_its_code() {
        let (task_tx, event_rx, _session) = worker();

        task_tx.send(AppTask::LookupTrack("USRC17607839".to_string())).unwrap();

        match next_event(&event_rx) {
            AppEvent::TrackLookedUp(code, Err(ApiError::Network { .. })) => {
                assert_eq!(code, "USRC17607839");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn login_failure_does_not_touch_the_session() {
        let (task_tx, event_rx, session) = worker();

        task_tx.send(AppTask::Login(Credentials::new("user", "pass"))).unwrap();

        match next_event(&event_rx) {
            AppEvent::LoginCompleted(credentials, Err(ApiError::Network { .. })) => {
                assert_eq!(credentials, Credentials::new("user", "pass"));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(!session.is_authenticated());
    }

    #[test]
    fn tasks_are_answered_in_order() {
        let (task_tx, event_rx, _session) = worker();

        task_tx.send(AppTask::LoadTrackDetail("A".to_string())).unwrap();
        task_tx.send(AppTask::LoadCover("B".to_string())).unwrap();

        assert!(matches!(
            next_event(&event_rx),
            AppEvent::DetailTrackLoaded(code, Err(_)) if code == "A"
        ));
        assert!(matches!(
            next_event(&event_rx),
            AppEvent::CoverLoaded(code, Err(_)) if code == "B"
        ));
    }
}
