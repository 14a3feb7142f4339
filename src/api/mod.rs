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

//! Access to the tracker backend.
//!
//! # Organization
//!
//! * [`client`]: Blocking HTTP transport with credential injection.
//! * [`cache`]: Tag-based response cache.
//! * [`service`]: The client combined with per-endpoint cache rules.
//! * [`error`]: The error taxonomy surfaced to the views.

pub(crate) mod cache;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod service;


pub(crate) use client::TrackerClient;
pub(crate) use error::ApiError;
pub(crate) use service::TrackService;
