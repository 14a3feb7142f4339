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

//! Interactive track result list.
//!
//! This module provides a table of tracks with keyboard navigation. Opening a
//! row is reported back as a [`TrackListAction`] so the owning page decides
//! where to navigate.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Track;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TrackListAction {
    /// Show the detail view for this ISRC code.
    Open(String),
    /// Hand focus back to whatever sits above the list.
    Leave,
}

pub(crate) struct TrackList {
    pub(crate) tracks: Vec<Track>,
    pub(crate) table_state: TableState,
    pub(crate) is_focused: bool,
}

impl TrackList {
    pub(crate) fn new() -> Self {
        Self {
            tracks: vec![],
            table_state: TableState::new(),
            is_focused: false,
        }
    }

    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        let selected = if self.tracks.is_empty() { None } else { Some(0) };
        self.table_state.select(selected);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(crate) fn selected(&self) -> Option<&Track> {
        self.table_state.selected().and_then(|i| self.tracks.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Moves up, returning `false` when already at the top.
    fn goto_previous(&mut self) -> bool {
        match self.table_state.selected() {
            Some(i) if i > 0 => {
                self.table_state.select(Some(i - 1));
                true
            }
            _ => false,
        }
    }

    fn goto_first(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(self.tracks.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::track;

    fn list_of(codes: &[&str]) -> TrackList {
        let mut list = TrackList::new();
        list.set_tracks(codes.iter().map(|c| track(c)).collect());
        list
    }

    #[test]
    fn setting_tracks_selects_first_row() {
        let list = list_of(&["A", "B"]);
        assert_eq!(list.selected().map(|t| t.isr_code.as_str()), Some("A"));

        let empty = list_of(&[]);
        assert!(empty.selected().is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn navigation_stops_at_the_edges() {
        let mut list = list_of(&["A", "B", "C"]);

        list.goto_next();
        list.goto_next();
        list.goto_next();
        assert_eq!(list.table_state.selected(), Some(2));

        assert!(list.goto_previous());
        assert!(list.goto_previous());
        assert!(!list.goto_previous());
        assert_eq!(list.table_state.selected(), Some(0));

        list.goto_last();
        assert_eq!(list.table_state.selected(), Some(2));
        list.goto_first();
        assert_eq!(list.table_state.selected(), Some(0));
    }
}
