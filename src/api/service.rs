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

//! Cached track service.
//!
//! Wraps [`TrackerClient`] with the cache rules for each endpoint:
//!
//! | Operation        | Provides           | Invalidates                  |
//! |------------------|--------------------|------------------------------|
//! | `get_track`      | `Track(code)`      |                              |
//! | `register_track` |                    | `Track(code)`, `TrackList`   |
//! | `get_cover`      | `Cover(code)`      |                              |
//!
//! Only successful responses are cached. Requests are made one at a time by
//! the owning worker, so a repeated query for a key is served from the cache
//! once the first one has completed.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    api::{
        ApiError,
        cache::{CacheTag, TagCache},
        client::{Registration, TrackerClient},
    },
    model::{Track, session::Credentials},
};

pub(crate) struct TrackService {
    client: TrackerClient,
    tracks: TagCache<Track>,
    covers: TagCache<Arc<[u8]>>,
}

impl TrackService {
    pub(crate) fn new(client: TrackerClient) -> Self {
        Self {
            client,
            tracks: TagCache::new(),
            covers: TagCache::new(),
        }
    }

    pub(crate) fn probe_login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.client.probe_login(credentials)
    }

    pub(crate) fn get_track(
        &mut self,
        credentials: Option<&Credentials>,
        isr_code: &str,
    ) -> Result<Track, ApiError> {
        if let Some(track) = self.tracks.get(isr_code) {
            debug!(isr_code, "Track served from cache");
            return Ok(track);
        }

        let track = self.client.get_track(credentials, isr_code)?;
        self.tracks.insert(
            isr_code,
            track.clone(),
            vec![CacheTag::Track(isr_code.to_string())],
        );

        Ok(track)
    }

    pub(crate) fn register_track(
        &mut self,
        credentials: Option<&Credentials>,
        isr_code: &str,
    ) -> Result<Track, ApiError> {
        let (track, registration) = self.client.register_track(credentials, isr_code)?;
        match registration {
            Registration::Created => info!(isr_code, "Track registered"),
            Registration::Existing => info!(isr_code, "Track already registered"),
        }

        let tags = [CacheTag::Track(isr_code.to_string()), CacheTag::TrackList];
        let removed = self.tracks.invalidate(&tags) + self.covers.invalidate(&tags);
        debug!(isr_code, removed, "Cache invalidated after registration");

        Ok(track)
    }

    pub(crate) fn get_cover(
        &mut self,
        credentials: Option<&Credentials>,
        isr_code: &str,
    ) -> Result<Arc<[u8]>, ApiError> {
        if let Some(cover) = self.covers.get(isr_code) {
            debug!(isr_code, "Cover served from cache");
            return Ok(cover);
        }

        let cover = self.client.get_cover(credentials, isr_code)?;
        self.covers.insert(
            isr_code,
            Arc::clone(&cover),
            vec![CacheTag::Cover(isr_code.to_string())],
        );

        Ok(cover)
    }

    /// Drops every cached response.
    pub(crate) fn clear(&mut self) {
        self.tracks.clear();
        self.covers.clear();
    }

    pub(crate) fn cached_len(&self) -> usize {
        self.tracks.len() + self.covers.len()
    }
}
