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
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::cover::CoverArt,
    render::{
        Render,
        icons::{ICON_DISC, ICON_LOADING},
    },
    theme::Theme,
};

impl Render for CoverArt {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Cover ")
            .padding(Padding::uniform(1));

        let lines = match self {
            CoverArt::Pending => vec![
                Line::from(Span::raw(ICON_LOADING).fg(theme.accent_colour)),
                Line::from(Span::raw("Loading cover...").fg(theme.muted_colour).italic()),
            ],
            CoverArt::Placeholder => vec![
                Line::from(Span::raw(ICON_DISC).fg(theme.muted_colour)),
                Line::from(""),
                Line::from(Span::raw("No cover available").fg(theme.muted_colour)),
            ],
            CoverArt::Ready(image) => vec![
                Line::from(Span::raw(ICON_DISC).fg(theme.accent_colour)),
                Line::from(""),
                Line::from(
                    Span::raw(format!("{} \u{00D7} {} px", image.width(), image.height()))
                        .bold(),
                ),
                Line::from(
                    Span::raw(format!("{}, {} bytes", image.mime(), image.size()))
                        .fg(theme.muted_colour),
                ),
                Line::from(""),
                Line::from(
                    Span::raw(image.path().display().to_string())
                        .fg(theme.muted_colour)
                        .dim(),
                ),
            ],
        };

        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
