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

//! The sign-in page.
//!
//! Collects a username and password, validates them locally and hands the
//! resulting [`Credentials`] to the caller, which probes the backend with
//! them. The page itself never touches the session.

mod event;
mod render;

use tui_input::Input;

use crate::{api::ApiError, model::session::Credentials};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LoginAction {
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginField {
    Username,
    Password,
}

pub(crate) struct LoginPage {
    pub(crate) username: Input,
    pub(crate) password: Input,
    pub(crate) focus: LoginField,
    pub(crate) show_password: bool,
    is_loading: bool,
    error: Option<String>,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginPage {
    pub(crate) fn new() -> Self {
        Self {
            username: Input::default(),
            password: Input::default(),
            focus: LoginField::Username,
            show_password: false,
            is_loading: false,
            error: None,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Checks the entered values without contacting the backend.
    ///
    /// Neither the username nor the password may be blank. The values
    /// themselves are passed on exactly as typed.
    pub(crate) fn validate(&self) -> Result<Credentials, ApiError> {
        if self.username.value().trim().is_empty() {
            return Err(ApiError::Validation("Username is required.".to_string()));
        }
        if self.password.value().trim().is_empty() {
            return Err(ApiError::Validation("Password is required.".to_string()));
        }

        Ok(Credentials::new(self.username.value(), self.password.value()))
    }

    /// Starts a sign-in attempt.
    ///
    /// Returns the credentials to probe with, or `None` if an attempt is
    /// already running or validation failed (the message is kept for
    /// display).
    pub(crate) fn begin(&mut self) -> Option<Credentials> {
        if self.is_loading {
            return None;
        }

        match self.validate() {
            Ok(credentials) => {
                self.error = None;
                self.is_loading = true;
                Some(credentials)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    pub(crate) fn complete(&mut self, result: &Result<(), ApiError>) {
        self.is_loading = false;
        match result {
            Ok(()) => self.reset(),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub(crate) fn toggle_field(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(username: &str, password: &str) -> LoginPage {
        let mut page = LoginPage::new();
        page.username = Input::new(username.to_string());
        page.password = Input::new(password.to_string());
        page
    }

    #[test]
    fn blank_username_is_rejected_locally() {
        let mut page = page("   ", "secret");

        assert_eq!(page.begin(), None);
        assert_eq!(page.error(), Some("Username is required."));
        assert!(!page.is_loading());
    }

    #[test]
    fn empty_password_is_rejected_locally() {
        let mut page = page("user", "");

        assert_eq!(page.begin(), None);
        assert_eq!(page.error(), Some("Password is required."));
    }

    #[test]
    fn whitespace_password_is_rejected_locally() {
        let mut page = page("user", "   ");

        assert_eq!(page.begin(), None);
        assert!(!page.is_loading());
        assert_eq!(page.error(), Some("Password is required."));
    }

    #[test]
    fn valid_input_starts_loading_with_untrimmed_values() {
        let mut page = page(" user ", " pass");

        let credentials = page.begin().unwrap();

        assert_eq!(credentials, Credentials::new(" user ", " pass"));
        assert!(page.is_loading());
        assert_eq!(page.begin(), None, "no second attempt while loading");
    }

    #[test]
    fn rejected_probe_keeps_message() {
        let mut page = page("user", "wrong");
        page.begin();

        page.complete(&Err(ApiError::Auth { status: 401 }));

        assert!(!page.is_loading());
        assert_eq!(page.error(), Some("Invalid username or password. Please try again."));
        assert_eq!(page.username.value(), "user");
    }

    #[test]
    fn accepted_probe_clears_the_form() {
        let mut page = page("user", "pass");
        page.begin();

        page.complete(&Ok(()));

        assert_eq!(page.password.value(), "");
        assert_eq!(page.error(), None);
    }
}
