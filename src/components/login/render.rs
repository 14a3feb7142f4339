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

//! UI rendering for the sign-in page.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};
use tui_input::Input;

use crate::{
    components::login::{LoginField, LoginPage},
    render::{
        Render, centered_rect,
        icons::{ICON_DISC, ICON_ERROR, ICON_LOCK},
    },
    theme::Theme,
};

const PASSWORD_MASK: char = '\u{2022}';

impl Render for LoginPage {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let card = centered_rect(area, 60, 20);
        f.render_widget(Clear, card);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(card);
        f.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(2), // subtitle
                Constraint::Length(3), // username
                Constraint::Length(3), // password
                Constraint::Length(2), // error
                Constraint::Length(1), // button
                Constraint::Min(0),
                Constraint::Length(1), // footer
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(format!("{ICON_DISC} ")).fg(theme.accent_colour),
                Span::raw("Music Tracker").bold(),
            ]))
            .alignment(Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new("Sign in with your backend credentials to continue.")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let username = self.username.value().to_string();
        self.draw_field(f, chunks[2], theme, LoginField::Username, "Username", username);

        let password = if self.show_password {
            self.password.value().to_string()
        } else {
            PASSWORD_MASK.to_string().repeat(self.password.value().chars().count())
        };
        self.draw_field(f, chunks[3], theme, LoginField::Password, "Password", password);

        if let Some(error) = self.error() {
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::raw(format!("{ICON_ERROR} ")),
                    Span::raw(error.to_string()),
                ]))
                .style(Style::default().fg(theme.error_colour))
                .wrap(Wrap { trim: true }),
                chunks[4],
            );
        }

        let button = if self.is_loading() {
            Span::raw(" Signing in... ").fg(theme.muted_colour).italic()
        } else {
            Span::raw(" Sign In ").bold().fg(theme.background_colour).bg(theme.accent_colour)
        };
        f.render_widget(
            Paragraph::new(Line::from(button)).alignment(Alignment::Center),
            chunks[5],
        );

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(format!("{ICON_LOCK} ")),
                Span::raw("Uses HTTP Basic Authentication to connect to the backend API."),
            ]))
            .style(Style::default().fg(theme.muted_colour).dim())
            .alignment(Alignment::Center),
            chunks[7],
        );
    }
}

impl LoginPage {
    fn draw_field(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        field: LoginField,
        label: &str,
        shown: String,
    ) {
        let is_focused = self.focus == field && !self.is_loading();
        let border_colour = if is_focused { theme.accent_colour } else { theme.border_colour };

        let title = match field {
            LoginField::Password if self.show_password => format!(" {label} (Ctrl+R to hide) "),
            LoginField::Password => format!(" {label} (Ctrl+R to show) "),
            LoginField::Username => format!(" {label} "),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(title)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let input: &Input = match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        };
        let width = inner.width.max(1) as usize;
        let scroll = input.visual_scroll(width);

        f.render_widget(Paragraph::new(shown).scroll((0, scroll as u16)), inner);

        if is_focused {
            let cursor_x = inner.x + (input.visual_cursor().max(scroll) - scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
