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

//! Input handling and event processing for the track list.
//!
//! This module maps raw terminal keyboard events to list navigation and
//! reports the actions the owner has to act on.

use crossterm::event::{Event, KeyCode};

use crate::components::track_list::{TrackList, TrackListAction};

impl TrackList {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TrackListAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.goto_previous() {
                    None
                } else {
                    Some(TrackListAction::Leave)
                }
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.goto_first();
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.goto_last();
                None
            }
            KeyCode::Esc => Some(TrackListAction::Leave),
            KeyCode::Enter => self
                .selected()
                .map(|track| TrackListAction::Open(track.isr_code.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::fixtures::track;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_opens_selected_track() {
        let mut list = TrackList::new();
        list.set_tracks(vec![track("A"), track("B")]);

        assert_eq!(list.process_event(&key(KeyCode::Down)), None);
        assert_eq!(
            list.process_event(&key(KeyCode::Enter)),
            Some(TrackListAction::Open("B".to_string()))
        );
    }

    #[test]
    fn up_from_first_row_leaves() {
        let mut list = TrackList::new();
        list.set_tracks(vec![track("A")]);

        assert_eq!(list.process_event(&key(KeyCode::Up)), Some(TrackListAction::Leave));
        assert_eq!(list.process_event(&key(KeyCode::Esc)), Some(TrackListAction::Leave));
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut list = TrackList::new();
        assert_eq!(list.process_event(&key(KeyCode::Enter)), None);
    }
}
