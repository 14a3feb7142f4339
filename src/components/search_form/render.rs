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

//! UI rendering for the search form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::search_form::SearchForm,
    render::{Render, icons::ICON_SEARCH},
    theme::Theme,
};

impl Render for SearchForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_focused && !self.is_loading {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let button = if self.is_loading { " Searching... " } else { " Search " };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" {} ", self.label))
            .title_bottom(Line::from(button).right_aligned())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(ICON_SEARCH).style(Style::default().fg(theme.muted_colour)),
            chunks[0],
        );

        let input_area = chunks[1];
        let width = input_area.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let text = if self.input.value().is_empty() {
            Line::from(Span::raw(self.placeholder).fg(theme.muted_colour).italic())
        } else {
            Line::from(self.input.value())
        };
        f.render_widget(
            Paragraph::new(text).scroll((0, scroll as u16)),
            input_area,
        );

        if self.is_focused && !self.is_loading {
            let cursor_x = input_area.x + (self.input.visual_cursor().max(scroll) - scroll) as u16;
            f.set_cursor_position((cursor_x, input_area.y));
        }
    }
}
