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

//! Track view state.
//!
//! Holds the "current" track (the last one registered or viewed) and an
//! optional list of lookup results. Both are set wholesale and can be cleared
//! independently.

use crate::model::Track;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum TrackStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

#[derive(Debug, Default)]
pub(crate) struct TrackState {
    track: Option<Track>,
    tracks: Option<Vec<Track>>,
    status: TrackStatus,
}

impl TrackState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Resets the current track to its initial (empty) value.
    pub(crate) fn init_track(&mut self) {
        self.track = None;
    }

    pub(crate) fn set_track(&mut self, track: Option<Track>) {
        self.track = track;
    }

    pub(crate) fn set_track_list(&mut self, tracks: Option<Vec<Track>>) {
        self.tracks = tracks;
    }

    pub(crate) fn set_status(&mut self, status: TrackStatus) {
        self.status = status;
    }

    pub(crate) fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub(crate) fn tracks(&self) -> Option<&[Track]> {
        self.tracks.as_deref()
    }

    pub(crate) fn status(&self) -> TrackStatus {
        self.status
    }

    /// Finds a track already held in the store, preferring the current track
    /// over the result list.
    pub(crate) fn find(&self, isr_code: &str) -> Option<&Track> {
        self.track
            .as_ref()
            .filter(|t| t.isr_code == isr_code)
            .or_else(|| {
                self.tracks
                    .as_ref()
                    .and_then(|tracks| tracks.iter().find(|t| t.isr_code == isr_code))
            })
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::track;

    #[test]
    fn set_track_none_clears_current_track() {
        let mut state = TrackState::new();
        state.set_track(None);
        assert!(state.track().is_none());

        state.set_track(Some(track("USRC17607839")));
        state.set_track(None);
        assert!(state.track().is_none());
    }

    #[test]
    fn set_track_list_none_clears_list() {
        let mut state = TrackState::new();
        state.set_track_list(Some(vec![track("A"), track("B")]));
        assert_eq!(state.tracks().map(<[Track]>::len), Some(2));

        state.set_track_list(None);
        assert!(state.tracks().is_none());

        state.set_track_list(None);
        assert!(state.tracks().is_none());
    }

    #[test]
    fn track_and_list_are_independent() {
        let mut state = TrackState::new();
        state.set_track(Some(track("A")));
        state.set_track_list(Some(vec![track("B")]));

        state.set_track_list(None);
        assert_eq!(state.track().map(|t| t.isr_code.as_str()), Some("A"));

        state.set_track_list(Some(vec![track("B")]));
        state.init_track();
        assert!(state.track().is_none());
        assert!(state.tracks().is_some());
    }

    #[test]
    fn find_prefers_current_track() {
        let mut state = TrackState::new();
        let mut current = track("A");
        current.name = "current".to_string();
        let mut listed = track("A");
        listed.name = "listed".to_string();

        state.set_track(Some(current));
        state.set_track_list(Some(vec![listed, track("B")]));

        assert_eq!(state.find("A").map(|t| t.name.as_str()), Some("current"));
        assert_eq!(state.find("B").map(|t| t.isr_code.as_str()), Some("B"));
        assert!(state.find("C").is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = TrackState::new();
        state.set_track(Some(track("A")));
        state.set_track_list(Some(vec![track("A")]));
        state.set_status(TrackStatus::Failed);

        state.clear();

        assert!(state.track().is_none());
        assert!(state.tracks().is_none());
        assert_eq!(state.status(), TrackStatus::Idle);
    }
}
