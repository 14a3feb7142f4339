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
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    components::TrackTab,
    render::{Render, icons::ICON_LOADING},
    theme::Theme,
};

impl Render for TrackTab {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Span::raw(self.kind.heading()).bold().fg(theme.accent_colour)),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(Span::raw(self.kind.description()).fg(theme.muted_colour))
                .wrap(Wrap { trim: true }),
            chunks[1],
        );

        self.form.draw(f, chunks[2], theme);

        let outcome_area = chunks[4];
        if self.is_loading() {
            let line = Line::from(vec![
                Span::raw(format!("{ICON_LOADING} ")).fg(theme.accent_colour),
                Span::raw("Loading track...").fg(theme.muted_colour).italic(),
            ]);
            f.render_widget(Paragraph::new(line), outcome_area);
        } else if let Some(error) = self.error.as_mut() {
            let height = outcome_area.height.min(5);
            error.draw(f, Rect { height, ..outcome_area }, theme);
        } else {
            self.results.draw(f, outcome_area, theme);
        }
    }
}
