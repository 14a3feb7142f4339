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

//! UI rendering logic for the track list.
//!
//! This module handles the visual representation of track results, including
//! column layout, the explicit badge, selection highlighting and theme
//! application using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::{
    components::track_list::TrackList,
    render::{Render, icons::ICON_CHEVRON},
    theme::Theme,
    util::format::{format_duration, result_count},
};

impl Render for TrackList {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        // An empty list renders nothing at all
        if self.tracks.is_empty() {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        f.render_widget(
            Paragraph::new(result_count(self.tracks.len()))
                .style(Style::default().fg(theme.muted_colour)),
            chunks[0],
        );

        self.draw_table(f, chunks[1], theme);
    }
}

impl TrackList {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.tracks.iter().map(|item| {
            let explicit = if item.is_explicit {
                Line::from(" E ").style(Style::default().fg(Color::White).bg(theme.error_colour))
            } else {
                Line::from("")
            };

            let artist_album = Line::from(vec![
                Span::styled(item.artist_name.as_str(), Style::default().fg(theme.table_artist_fg)),
                Span::raw(" \u{00B7} ").fg(theme.muted_colour),
                Span::styled(item.album_name.as_str(), Style::default().fg(theme.table_album_fg)),
            ]);

            Row::new(vec![
                Cell::from(explicit),
                Cell::from(
                    Line::from(item.isr_code.as_str())
                        .style(Style::default().fg(theme.table_isrc_fg)),
                ),
                Cell::from(
                    Line::from(item.name.as_str())
                        .style(Style::default().fg(theme.table_track_fg).bold()),
                ),
                Cell::from(artist_album),
                Cell::from(
                    Line::from(format_duration(item.playback_seconds))
                        .style(Style::default().fg(theme.table_time_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(Line::from(ICON_CHEVRON).style(Style::default().fg(theme.muted_colour))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(14),
                Constraint::Percentage(40),
                Constraint::Percentage(60),
                Constraint::Length(6),
                Constraint::Length(2),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("ISRC"),
                Cell::from("Title"),
                Cell::from("Artist / Album"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from(""),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        );

        let table = if self.is_focused {
            table.row_highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White))
        } else {
            table
        };

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
