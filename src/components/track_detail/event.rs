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

use crossterm::event::{Event, KeyCode};

use crate::components::track_detail::{DetailAction, TrackDetail};

impl TrackDetail {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<DetailAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                    Some(DetailAction::Back)
                }
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::track_state::TrackState;

    #[test]
    fn escape_goes_back() {
        let mut detail = TrackDetail::open("A", &TrackState::new());
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        let other = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

        assert_eq!(detail.process_event(&esc), Some(DetailAction::Back));
        assert_eq!(detail.process_event(&other), None);
    }
}
