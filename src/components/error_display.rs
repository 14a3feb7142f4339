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

//! Inline error panel shown in place of a result.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    api::ApiError,
    render::{Render, icons::ICON_ERROR},
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorDisplay {
    pub(crate) title: &'static str,
    pub(crate) message: String,
    pub(crate) status: Option<u16>,
}

impl From<&ApiError> for ErrorDisplay {
    fn from(err: &ApiError) -> Self {
        Self {
            title: err.title(),
            message: err.to_string(),
            status: err.status(),
        }
    }
}

impl Render for ErrorDisplay {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error_colour))
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{ICON_ERROR} ")).fg(theme.error_colour),
                Span::raw(self.title).bold().fg(theme.error_colour),
            ]),
            Line::from(Span::raw(self.message.as_str()).fg(theme.muted_colour)),
        ];

        if let Some(status) = self.status {
            lines.push(Line::from(
                Span::raw(format!("Status: {status}")).fg(theme.muted_colour).dim(),
            ));
        }

        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_from_api_error() {
        let err = ApiError::NotFound {
            message: "Track not found: USXX".to_string(),
        };

        assert_eq!(
            ErrorDisplay::from(&err),
            ErrorDisplay {
                title: "Track Not Found",
                message: "Track not found: USXX".to_string(),
                status: Some(404),
            }
        );
    }

    #[test]
    fn network_errors_have_no_status() {
        let err = ApiError::Network {
            cause: "connection refused".to_string(),
        };
        let display = ErrorDisplay::from(&err);

        assert_eq!(display.title, "Something Went Wrong");
        assert_eq!(display.status, None);
    }
}
