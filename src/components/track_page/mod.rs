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

//! The tracks page: register and lookup tabs.
//!
//! Keyboard focus is either on the active tab's form or on its result list.
//! The page turns key presses into [`TrackPageAction`]s, the event handlers
//! decide what to dispatch.

mod event;
mod render;

use crate::components::{TabKind, TrackTab};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TrackPageAction {
    Submit(TabKind),
    OpenTrack(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Form,
    Results,
}

pub(crate) struct TrackPage {
    register: TrackTab,
    lookup: TrackTab,
    active: TabKind,
    focus: Focus,
}

impl TrackPage {
    pub(crate) fn new() -> Self {
        let mut page = Self {
            register: TrackTab::new(TabKind::Register),
            lookup: TrackTab::new(TabKind::Lookup),
            active: TabKind::Register,
            focus: Focus::Form,
        };
        page.select_tab(TabKind::Register);
        page
    }

    pub(crate) fn tab(&self, kind: TabKind) -> &TrackTab {
        match kind {
            TabKind::Register => &self.register,
            TabKind::Lookup => &self.lookup,
        }
    }

    pub(crate) fn tab_mut(&mut self, kind: TabKind) -> &mut TrackTab {
        match kind {
            TabKind::Register => &mut self.register,
            TabKind::Lookup => &mut self.lookup,
        }
    }

    pub(crate) fn active(&self) -> TabKind {
        self.active
    }

    pub(crate) fn focus(&self) -> Focus {
        self.focus
    }

    pub(crate) fn select_tab(&mut self, kind: TabKind) {
        self.active = kind;
        self.set_focus(Focus::Form);
    }

    fn toggle_tab(&mut self) {
        let next = match self.active {
            TabKind::Register => TabKind::Lookup,
            TabKind::Lookup => TabKind::Register,
        };
        self.select_tab(next);
    }

    fn set_focus(&mut self, focus: Focus) {
        let focus = if focus == Focus::Results && self.tab(self.active).results.is_empty() {
            Focus::Form
        } else {
            focus
        };

        self.focus = focus;
        for kind in [TabKind::Register, TabKind::Lookup] {
            let is_active = kind == self.active;
            let tab = self.tab_mut(kind);
            tab.form.is_focused = is_active && focus == Focus::Form;
            tab.results.is_focused = is_active && focus == Focus::Results;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.register.reset();
        self.lookup.reset();
        self.select_tab(TabKind::Register);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::track;

    #[test]
    fn starts_on_register_form() {
        let page = TrackPage::new();
        assert_eq!(page.active(), TabKind::Register);
        assert_eq!(page.focus(), Focus::Form);
    }

    #[test]
    fn results_focus_needs_results() {
        let mut page = TrackPage::new();
        page.set_focus(Focus::Results);
        assert_eq!(page.focus(), Focus::Form);

        page.tab_mut(TabKind::Register).complete(&Ok(track("A")));
        page.set_focus(Focus::Results);
        assert_eq!(page.focus(), Focus::Results);
        assert!(page.tab(TabKind::Register).results.is_focused);
        assert!(!page.tab(TabKind::Register).form.is_focused);
    }

    #[test]
    fn switching_tabs_keeps_each_tab_state() {
        let mut page = TrackPage::new();
        page.tab_mut(TabKind::Register).complete(&Ok(track("A")));

        page.toggle_tab();
        assert_eq!(page.active(), TabKind::Lookup);
        assert!(page.tab(TabKind::Lookup).result().is_empty());

        page.toggle_tab();
        assert_eq!(page.tab(TabKind::Register).result().len(), 1);
    }

    #[test]
    fn reset_clears_both_tabs() {
        let mut page = TrackPage::new();
        page.tab_mut(TabKind::Register).complete(&Ok(track("A")));
        page.tab_mut(TabKind::Lookup).complete(&Ok(track("B")));
        page.select_tab(TabKind::Lookup);

        page.reset();

        assert_eq!(page.active(), TabKind::Register);
        assert!(page.tab(TabKind::Register).result().is_empty());
        assert!(page.tab(TabKind::Lookup).result().is_empty());
    }
}
