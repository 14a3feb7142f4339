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

//! UI rendering for the track detail view.
//!
//! The cover panel sits on the left and the metadata on the right. While the
//! track is being fetched only a loading line is shown, and a failed fetch
//! shows "Track not found." with no panels at all.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::{DetailState, TrackDetail},
    model::Track,
    render::{
        Render,
        icons::{ICON_ALBUM, ICON_ARTIST, ICON_BACK, ICON_CLOCK, ICON_EXPLICIT, ICON_LOADING},
    },
    theme::Theme,
    util::format::format_duration,
};

impl Render for TrackDetail {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(format!("{ICON_BACK} ")).fg(theme.accent_colour),
                Span::raw("Back to Tracks").fg(theme.accent_colour),
                Span::raw("  (Esc)").fg(theme.muted_colour).dim(),
            ])),
            chunks[0],
        );

        let body = chunks[1];
        match self.state().clone() {
            DetailState::Loading => {
                let line = Line::from(vec![
                    Span::raw(format!("{ICON_LOADING} ")).fg(theme.accent_colour),
                    Span::raw("Loading track...").fg(theme.muted_colour).italic(),
                ]);
                f.render_widget(Paragraph::new(line), body);
            }
            DetailState::NotFound => {
                f.render_widget(
                    Paragraph::new("Track not found.")
                        .style(Style::default().fg(theme.muted_colour)),
                    body,
                );
            }
            DetailState::Ready(track) => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(34), Constraint::Min(0)])
                    .split(body);

                self.cover.draw(f, columns[0], theme);
                draw_metadata(f, columns[1], &track, theme);
            }
        }
    }
}

fn draw_metadata(f: &mut Frame, area: Rect, track: &Track, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::new(2, 2, 1, 1));

    let mut badges = vec![
        Span::raw(format!(" {} ", track.isr_code))
            .fg(theme.table_isrc_fg)
            .bold(),
    ];
    if track.is_explicit {
        badges.push(Span::raw(" "));
        badges.push(
            Span::raw(format!(" {ICON_EXPLICIT} Explicit "))
                .fg(Color::White)
                .bg(theme.error_colour),
        );
    }

    let lines = vec![
        Line::from(badges),
        Line::from(""),
        Line::from(Span::raw(track.name.as_str()).bold().fg(theme.table_track_fg)),
        Line::from(""),
        metadata_line(ICON_ARTIST, "Artist", &track.artist_name, theme),
        metadata_line(ICON_ALBUM, "Album", &track.album_name, theme),
        metadata_line(ICON_CLOCK, "Duration", &format_duration(track.playback_seconds), theme),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn metadata_line<'a>(icon: &'a str, label: &'a str, value: &str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::raw(format!("{icon} ")).fg(theme.muted_colour),
        Span::raw(format!("{label:<10}")).fg(theme.muted_colour),
        Span::raw(value.to_string()),
    ])
}
