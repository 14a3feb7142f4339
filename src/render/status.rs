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

//! The status bar.
//!
//! Shows the last application error if there is one, otherwise the keys that
//! apply to the page on screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    components::Focus,
    render::icons::ICON_ERROR,
    routes::{self, Route},
};

pub(crate) fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = match &app.status_message {
        Some(message) => Line::from(vec![
            Span::raw(format!(" {ICON_ERROR} ")).fg(theme.error_colour),
            Span::raw(message.as_str()).fg(theme.error_colour),
        ]),
        None => {
            let route = routes::resolve(&app.session.snapshot(), app.route.clone());
            Line::from(Span::raw(key_hints(app, &route)).fg(theme.muted_colour))
        }
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.status_bg)),
        area,
    );
}

fn key_hints(app: &App, route: &Route) -> &'static str {
    match route {
        Route::Login => " Tab switch field  Enter sign in  Ctrl+R show password  Ctrl+C quit",
        Route::Tracks => match app.track_page.focus() {
            Focus::Form => {
                " Tab switch tab  Enter submit  Down results  Ctrl+O sign out  Ctrl+C quit"
            }
            Focus::Results => {
                " j/k move  Enter open  Esc back to form  Ctrl+O sign out  Ctrl+C quit"
            }
        },
        Route::TrackDetail(_) => " Esc back to tracks  Ctrl+O sign out  Ctrl+C quit",
    }
}
