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

//! ISRC code entry form.
//!
//! A single text input that normalizes whatever was typed into an ISRC-style
//! code (trimmed, upper case) before handing it to the caller. Empty
//! submissions are silently ignored, and the input is disabled while the
//! caller's request is outstanding.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchFormAction {
    Submit,
}

pub(crate) struct SearchForm {
    pub(crate) input: Input,
    label: &'static str,
    placeholder: &'static str,
    is_loading: bool,
    pub(crate) is_focused: bool,
}

/// Trims and upper-cases raw input, `None` when nothing is left.
pub(crate) fn normalize_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_uppercase();
    (!code.is_empty()).then_some(code)
}

impl SearchForm {
    pub(crate) fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            input: Input::default(),
            label,
            placeholder,
            is_loading: false,
            is_focused: true,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// The normalized code that would be submitted right now.
    pub(crate) fn submission(&self) -> Option<String> {
        normalize_code(self.input.value())
    }

    /// Invokes `handler` with the normalized code.
    ///
    /// Returns `false` without calling the handler when the input is blank or
    /// a previous submission is still loading.
    pub(crate) fn submit<F>(&self, handler: F) -> bool
    where
        F: FnOnce(String),
    {
        if self.is_loading {
            return false;
        }

        match self.submission() {
            Some(code) => {
                handler(code);
                true
            }
            None => false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.input.reset();
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(value: &str) -> SearchForm {
        let mut form = SearchForm::new("ISRC Code", "e.g. USRC17607839");
        form.input = Input::new(value.to_string());
        form
    }

    #[test]
    fn normalizes_to_trimmed_uppercase() {
        let mut received = None;
        let submitted = form_with("  usmc18620549  ").submit(|code| received = Some(code));

        assert!(submitted);
        assert_eq!(received.as_deref(), Some("USMC18620549"));
    }

    #[test]
    fn whitespace_never_invokes_handler() {
        for raw in ["", " ", "\t", "   \n  "] {
            let mut called = false;
            let submitted = form_with(raw).submit(|_| called = true);

            assert!(!submitted);
            assert!(!called, "handler called for {raw:?}");
        }
    }

    #[test]
    fn normalization_holds_for_mixed_inputs() {
        let cases = [
            ("usrc17607839", "USRC17607839"),
            ("\tgbAYe0601498 ", "GBAYE0601498"),
            ("a b", "A B"),
            ("ÿ", "Ÿ"),
        ];

        for (raw, expected) in cases {
            assert_eq!(normalize_code(raw).as_deref(), Some(expected));
        }
    }

    #[test]
    fn loading_form_does_not_submit() {
        let mut form = form_with("USRC17607839");
        form.set_loading(true);

        let mut called = false;
        assert!(!form.submit(|_| called = true));
        assert!(!called);
    }

    #[test]
    fn reset_clears_input_and_loading() {
        let mut form = form_with("abc");
        form.set_loading(true);
        form.reset();

        assert_eq!(form.input.value(), "");
        assert!(!form.is_loading());
    }
}
