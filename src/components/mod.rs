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

//! UI components.
//!
//! Each component owns its view state, turns terminal events into a small
//! action enum of its own, and implements [`crate::render::Render`].

mod cover;
mod error_display;
mod login;
mod search_form;
mod track_detail;
mod track_list;
mod track_page;
mod track_tab;

pub(crate) use cover::CoverArt;
pub(crate) use error_display::ErrorDisplay;
pub(crate) use login::{LoginAction, LoginPage};
pub(crate) use search_form::{SearchForm, SearchFormAction};
pub(crate) use track_detail::{DetailAction, DetailState, TrackDetail};
pub(crate) use track_list::{TrackList, TrackListAction};
pub(crate) use track_page::{Focus, TrackPage, TrackPageAction};
pub(crate) use track_tab::{TabKind, TrackTab};
