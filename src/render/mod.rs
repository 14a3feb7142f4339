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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface. The
//! route guard is consulted on every frame, so protected pages are never
//! drawn for a signed-out session.

mod header;
pub(crate) mod icons;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    widgets::{Block, Padding},
};

use crate::{
    App,
    render::{header::draw_header, status::draw_status_bar},
    routes::{self, Route},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, page and status bar.
/// * **Guarding**: Resolving the current route against the session, a
///   signed-out session always gets the sign-in page.
/// * **Styling**: Applying colors and borders defined in the application theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like list scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: header, main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let main = Block::default().padding(Padding::horizontal(2)).inner(outer[1]);
    let theme = app.theme;

    match routes::resolve(&app.session.snapshot(), app.route.clone()) {
        Route::Login => app.login_page.draw(f, main, &theme),
        Route::Tracks => app.track_page.draw(f, main, &theme),
        Route::TrackDetail(_) => {
            if let Some(detail) = app.detail.as_mut() {
                detail.draw(f, main, &theme);
            }
        }
    }

    draw_status_bar(f, outer[2], app);
}

/// A rectangle of at most `width` x `height` centred in `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_rect_is_clamped_and_centred() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 60, 20), Rect::new(20, 10, 60, 20));

        let small = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(small, 60, 20), small);
    }
}
