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

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::components::login::{LoginAction, LoginField, LoginPage};

impl LoginPage {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<LoginAction> {
        if self.is_loading {
            return None;
        }

        if let Event::Key(key_event) = event {
            match (key_event.code, key_event.modifiers) {
                (KeyCode::Tab, _)
                | (KeyCode::BackTab, _)
                | (KeyCode::Up, _)
                | (KeyCode::Down, _) => {
                    self.toggle_field();
                    return None;
                }
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                    self.show_password = !self.show_password;
                    return None;
                }
                (KeyCode::Enter, _) => return Some(LoginAction::Submit),
                _ => {}
            }
        }

        match self.focus {
            LoginField::Username => self.username.handle_event(event),
            LoginField::Password => self.password.handle_event(event),
        };

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(page: &mut LoginPage, s: &str) {
        for c in s.chars() {
            page.process_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn fills_fields_in_turn() {
        let mut page = LoginPage::new();

        type_str(&mut page, "user");
        page.process_event(&key(KeyCode::Tab));
        type_str(&mut page, "pass");

        assert_eq!(page.username.value(), "user");
        assert_eq!(page.password.value(), "pass");
        assert_eq!(page.process_event(&key(KeyCode::Enter)), Some(LoginAction::Submit));
    }

    #[test]
    fn ctrl_r_reveals_password() {
        let mut page = LoginPage::new();
        let reveal = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

        page.process_event(&reveal);
        assert!(page.show_password);
        assert_eq!(page.username.value(), "");

        page.process_event(&reveal);
        assert!(!page.show_password);
    }
}
