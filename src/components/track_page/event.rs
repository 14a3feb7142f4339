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

//! Event routing for the tracks page.
//!
//! `Tab` switches between the register and lookup tabs, `Down` moves from the
//! form into the result list, everything else goes to whichever part has
//! focus.

use crossterm::event::{Event, KeyCode};

use crate::components::{
    SearchFormAction, TrackListAction,
    track_page::{Focus, TrackPage, TrackPageAction},
};

impl TrackPage {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TrackPageAction> {
        if let Event::Key(key_event) = event {
            match (key_event.code, self.focus) {
                (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                    self.toggle_tab();
                    return None;
                }
                (KeyCode::Down, Focus::Form) => {
                    self.set_focus(Focus::Results);
                    return None;
                }
                _ => {}
            }
        }

        let active = self.active;
        match self.focus {
            Focus::Form => match self.tab_mut(active).form.process_event(event) {
                Some(SearchFormAction::Submit) => Some(TrackPageAction::Submit(active)),
                None => None,
            },
            Focus::Results => match self.tab_mut(active).results.process_event(event) {
                Some(TrackListAction::Open(code)) => Some(TrackPageAction::OpenTrack(code)),
                Some(TrackListAction::Leave) => {
                    self.set_focus(Focus::Form);
                    None
                }
                None => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{components::TabKind, model::fixtures::track};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_in_form_submits_active_tab() {
        let mut page = TrackPage::new();
        page.process_event(&key(KeyCode::Tab));

        assert_eq!(
            page.process_event(&key(KeyCode::Enter)),
            Some(TrackPageAction::Submit(TabKind::Lookup))
        );
    }

    #[test]
    fn result_rows_open_details() {
        let mut page = TrackPage::new();
        page.tab_mut(TabKind::Register).complete(&Ok(track("USRC17607839")));

        page.process_event(&key(KeyCode::Down));
        assert_eq!(page.focus(), Focus::Results);

        assert_eq!(
            page.process_event(&key(KeyCode::Enter)),
            Some(TrackPageAction::OpenTrack("USRC17607839".to_string()))
        );

        page.process_event(&key(KeyCode::Esc));
        assert_eq!(page.focus(), Focus::Form);
    }

    #[test]
    fn typing_goes_to_the_focused_form() {
        let mut page = TrackPage::new();
        page.process_event(&key(KeyCode::Char('j')));

        assert_eq!(page.tab(TabKind::Register).form.input.value(), "j");
        assert_eq!(page.tab(TabKind::Lookup).form.input.value(), "");
    }
}
