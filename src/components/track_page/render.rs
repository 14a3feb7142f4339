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
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::{
    components::{TabKind, track_page::TrackPage},
    render::{Render, icons::ICON_DISC},
    theme::Theme,
};

const TAB_ORDER: [TabKind; 2] = [TabKind::Register, TabKind::Lookup];

impl Render for TrackPage {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let hero = vec![
            Line::from(vec![
                Span::raw(format!("{ICON_DISC} ")).fg(theme.accent_colour),
                Span::raw("Track Metadata Lookup").bold(),
            ]),
            Line::from("Register tracks by ISRC and look up stored metadata.")
                .fg(theme.muted_colour),
        ];
        f.render_widget(Paragraph::new(hero), chunks[0]);

        let selected = TAB_ORDER.iter().position(|kind| *kind == self.active()).unwrap_or(0);
        let tabs = Tabs::new(TAB_ORDER.iter().map(|kind| kind.title()))
            .select(selected)
            .style(Style::default().fg(theme.muted_colour))
            .highlight_style(Style::default().fg(theme.accent_colour).bold().underlined())
            .divider(" | ")
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border_colour)),
            );
        f.render_widget(tabs, chunks[1]);

        let body = Block::default().padding(Padding::new(1, 1, 1, 0)).inner(chunks[2]);
        let active = self.active();
        self.tab_mut(active).draw(f, body, theme);
    }
}
