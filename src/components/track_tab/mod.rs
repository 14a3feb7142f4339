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

//! One tab of the tracks page.
//!
//! A tab pairs a [`SearchForm`] with the outcome of its last submission: a
//! loading indicator while the request is outstanding, then either exactly
//! the returned track or an error panel, never both.

mod render;

use anyhow::Result;

use crate::{
    api::ApiError,
    components::{ErrorDisplay, SearchForm, TrackList},
    model::Track,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TabKind {
    Register,
    Lookup,
}

impl TabKind {
    pub(crate) fn title(self) -> &'static str {
        match self {
            TabKind::Register => "Register Track",
            TabKind::Lookup => "Lookup Track",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            TabKind::Register => "Register a New Track",
            TabKind::Lookup => "Lookup Stored Track",
        }
    }

    fn description(self) -> &'static str {
        match self {
            TabKind::Register => {
                "Fetch track metadata from the music provider and store it for future lookups."
            }
            TabKind::Lookup => {
                "Retrieve metadata for a track that has already been registered. \
                 Select a result to view full details."
            }
        }
    }
}

pub(crate) struct TrackTab {
    pub(crate) kind: TabKind,
    pub(crate) form: SearchForm,
    pub(crate) results: TrackList,
    error: Option<ErrorDisplay>,
    pending: Option<String>,
}

impl TrackTab {
    pub(crate) fn new(kind: TabKind) -> Self {
        let placeholder = match kind {
            TabKind::Register => "e.g. USRC17607839",
            TabKind::Lookup => "e.g. USMC18620549",
        };

        Self {
            kind,
            form: SearchForm::new("ISRC Code", placeholder),
            results: TrackList::new(),
            error: None,
            pending: None,
        }
    }

    /// Submits the form through `handler`.
    ///
    /// Blank input is a no-op and returns `Ok(false)`. Otherwise the previous
    /// outcome is cleared and the tab shows a loading state until
    /// [`TrackTab::complete`] is called.
    pub(crate) fn submit<F>(&mut self, handler: F) -> Result<bool>
    where
        F: FnOnce(&str) -> Result<()>,
    {
        let mut outcome = Ok(());
        let mut code = None;
        let submitted = self.form.submit(|submission| {
            outcome = handler(&submission);
            code = Some(submission);
        });
        if !submitted {
            return Ok(false);
        }

        outcome?;

        self.error = None;
        self.results.set_tracks(vec![]);
        self.form.set_loading(true);
        self.pending = code;

        Ok(true)
    }

    pub(crate) fn complete(&mut self, result: &Result<Track, ApiError>) {
        self.form.set_loading(false);
        self.pending = None;
        match result {
            Ok(track) => {
                self.error = None;
                self.results.set_tracks(vec![track.clone()]);
            }
            Err(err) => {
                self.error = Some(ErrorDisplay::from(err));
                self.results.set_tracks(vec![]);
            }
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.form.is_loading()
    }

    /// Whether the outstanding submission is for `code`.
    pub(crate) fn is_awaiting(&self, code: &str) -> bool {
        self.is_loading() && self.pending.as_deref() == Some(code)
    }

    pub(crate) fn error(&self) -> Option<&ErrorDisplay> {
        self.error.as_ref()
    }

    pub(crate) fn result(&self) -> &[Track] {
        &self.results.tracks
    }

    pub(crate) fn reset(&mut self) {
        self.form.reset();
        self.results.set_tracks(vec![]);
        self.error = None;
        self.pending = None;
    }
}
