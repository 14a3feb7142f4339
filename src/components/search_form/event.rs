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

//! Input handling for the search form.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::search_form::{SearchForm, SearchFormAction};

impl SearchForm {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchFormAction> {
        // Disabled while a request is outstanding
        if self.is_loading {
            return None;
        }

        match event {
            Event::Key(key_event) if key_event.code == KeyCode::Enter => {
                Some(SearchFormAction::Submit)
            }
            _ => {
                self.input.handle_event(event);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_then_enter_submits() {
        let mut form = SearchForm::new("ISRC Code", "");
        for c in "usrc1".chars() {
            assert_eq!(form.process_event(&key(KeyCode::Char(c))), None);
        }

        assert_eq!(form.input.value(), "usrc1");
        assert_eq!(form.process_event(&key(KeyCode::Enter)), Some(SearchFormAction::Submit));
        assert_eq!(form.submission().as_deref(), Some("USRC1"));
    }

    #[test]
    fn input_is_disabled_while_loading() {
        let mut form = SearchForm::new("ISRC Code", "");
        form.set_loading(true);

        assert_eq!(form.process_event(&key(KeyCode::Char('x'))), None);
        assert_eq!(form.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(form.input.value(), "");
    }
}
