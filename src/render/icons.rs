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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

// Text-style variants (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icons as monochrome text rather than colorful
// emojis, ensuring they respect the TUI's color styling.
pub(crate) const ICON_SEARCH: &str = "\u{1F50D}\u{FE0E}";
pub(crate) const ICON_LOCK: &str = "\u{1F512}\u{FE0E}";
pub(crate) const ICON_DISC: &str = "\u{1F4BF}\u{FE0E}";
pub(crate) const ICON_ERROR: &str = "\u{26A0}\u{FE0E}";
pub(crate) const ICON_EXPLICIT: &str = "\u{26A0}\u{FE0E}";
pub(crate) const ICON_CLOCK: &str = "\u{23F1}\u{FE0E}";

pub(crate) const ICON_ARTIST: &str = "\u{266A}";
pub(crate) const ICON_ALBUM: &str = "\u{25CE}";
pub(crate) const ICON_LOADING: &str = "\u{231B}\u{FE0E}";

// Navigation
pub(crate) const ICON_CHEVRON: &str = "\u{203A}";
pub(crate) const ICON_BACK: &str = "\u{2190}";
