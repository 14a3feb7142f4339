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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    model::track_state::TrackStatus,
    render::icons::{ICON_DISC, ICON_LOADING},
};

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let session = app.session.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .horizontal_margin(1)
        .split(area);

    let mut title = vec![
        Span::raw(format!("{ICON_DISC} ")).fg(theme.accent_colour),
        Span::raw("Music Tracker").bold(),
    ];
    match app.track_state.status() {
        TrackStatus::Loading => {
            title.push(
                Span::raw(format!("  {ICON_LOADING} working..."))
                    .fg(theme.muted_colour)
                    .italic(),
            );
        }
        TrackStatus::Failed => {
            title.push(Span::raw("  last request failed").fg(theme.error_colour));
        }
        TrackStatus::Idle => {}
    }

    f.render_widget(
        Paragraph::new(Line::from(title)).style(Style::default().bg(theme.status_bg)),
        chunks[0],
    );

    let account = if session.is_authenticated {
        Line::from(vec![
            Span::raw(session.username).fg(theme.accent_colour),
            Span::raw("  Ctrl+O sign out").fg(theme.muted_colour),
        ])
    } else {
        Line::from(Span::raw(app.config.base_url.as_str()).fg(theme.muted_colour))
    };
    f.render_widget(
        Paragraph::new(account.right_aligned()).style(Style::default().bg(theme.status_bg)),
        chunks[1],
    );
}
