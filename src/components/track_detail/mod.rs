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

//! Detail view for a single track.
//!
//! The view is keyed by ISRC code. A track already held by the track state is
//! shown straight away, otherwise it is fetched first. Once the track is
//! known its cover is requested.

mod event;
mod render;

use std::sync::Arc;

use tracing::debug;

use crate::{
    api::ApiError,
    components::CoverArt,
    model::{Track, track_state::TrackState},
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DetailAction {
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DetailState {
    Loading,
    Ready(Track),
    NotFound,
}

pub(crate) struct TrackDetail {
    code: String,
    state: DetailState,
    cover: CoverArt,
}

impl TrackDetail {
    pub(crate) fn open(code: &str, track_state: &TrackState) -> Self {
        let state = match track_state.find(code) {
            Some(track) => DetailState::Ready(track.clone()),
            None => DetailState::Loading,
        };

        Self {
            code: code.to_string(),
            state,
            cover: CoverArt::Pending,
        }
    }

    pub(crate) fn state(&self) -> &DetailState {
        &self.state
    }

    pub(crate) fn cover(&self) -> &CoverArt {
        &self.cover
    }

    /// Whether the track still has to be fetched.
    pub(crate) fn needs_track(&self) -> bool {
        self.state == DetailState::Loading
    }

    pub(crate) fn is_for(&self, code: &str) -> bool {
        self.code == code
    }

    /// Applies the fetched track, returning `true` if the cover should now be
    /// requested.
    pub(crate) fn track_loaded(&mut self, result: Result<Track, ApiError>) -> bool {
        match result {
            Ok(track) => {
                self.state = DetailState::Ready(track);
                true
            }
            Err(e) => {
                debug!(code = %self.code, "Track detail unavailable: {e}");
                self.state = DetailState::NotFound;
                false
            }
        }
    }

    pub(crate) fn cover_loaded(&mut self, result: Result<Arc<[u8]>, ApiError>) {
        let next = match result {
            Ok(bytes) => CoverArt::from_bytes(&bytes),
            Err(e) => {
                debug!(code = %self.code, "No cover: {e}");
                CoverArt::Placeholder
            }
        };
        self.cover.replace(next);
    }

    /// Releases the cover image, called when the view is torn down.
    pub(crate) fn release(&mut self) {
        self.cover.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{PNG_1X1, track};

    #[test]
    fn opens_from_current_track() {
        let mut state = TrackState::new();
        state.set_track(Some(track("USRC17607839")));

        let detail = TrackDetail::open("USRC17607839", &state);

        assert!(!detail.needs_track());
        assert_eq!(detail.state(), &DetailState::Ready(track("USRC17607839")));
    }

    #[test]
    fn opens_from_track_list() {
        let mut state = TrackState::new();
        state.set_track_list(Some(vec![track("A"), track("B")]));

        let detail = TrackDetail::open("B", &state);

        assert_eq!(detail.state(), &DetailState::Ready(track("B")));
    }

    #[test]
    fn unknown_code_loads() {
        let mut detail = TrackDetail::open("USXX", &TrackState::new());
        assert!(detail.needs_track());

        let fetch_cover = detail.track_loaded(Ok(track("USXX")));

        assert!(fetch_cover);
        assert_eq!(detail.state(), &DetailState::Ready(track("USXX")));
    }

    #[test]
    fn failed_load_is_not_found() {
        let mut detail = TrackDetail::open("USXX", &TrackState::new());

        let fetch_cover = detail.track_loaded(Err(ApiError::NotFound {
            message: "Track not found".to_string(),
        }));

        assert!(!fetch_cover);
        assert_eq!(detail.state(), &DetailState::NotFound);
    }

    #[test]
    fn failed_cover_shows_placeholder() {
        let mut detail = TrackDetail::open("USXX", &TrackState::new());

        detail.cover_loaded(Err(ApiError::NotFound {
            message: "Cover not found".to_string(),
        }));

        assert!(matches!(detail.cover(), CoverArt::Placeholder));
    }

    #[test]
    fn release_drops_cover_file() {
        let mut detail = TrackDetail::open("USXX", &TrackState::new());
        detail.cover_loaded(Ok(Arc::from(PNG_1X1)));
        let path = detail.cover().image().unwrap().path().to_path_buf();

        detail.release();

        assert!(!path.exists());
        assert!(matches!(detail.cover(), CoverArt::Pending));
    }
}
