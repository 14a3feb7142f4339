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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the track
//! metadata returned by the tracker backend, along with the in-memory stores
//! that hold session and track state for the lifetime of the process.

pub(crate) mod session;
pub(crate) mod track_state;

use serde::{Deserialize, Serialize};

/// Track metadata as stored by the tracker backend.
///
/// Tracks are identified by their ISRC code and are never modified locally,
/// a new lookup or registration replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Track {
    pub(crate) isr_code: String,
    pub(crate) name: String,
    pub(crate) artist_name: String,
    pub(crate) album_name: String,
    pub(crate) album_id: String,
    pub(crate) is_explicit: bool,
    #[serde(default)]
    pub(crate) playback_seconds: u64,
    pub(crate) cover_path: Option<String>,
}

/// Request body for track registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterTrack<'a> {
    pub(crate) isr_code: &'a str,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Track;

    /// A complete 1x1 RGBA PNG.
    pub(crate) const PNG_1X1: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    pub(crate) fn track(isr_code: &str) -> Track {
        Track {
            isr_code: isr_code.to_string(),
            name: "Never Gonna Give You Up".to_string(),
            artist_name: "Rick Astley".to_string(),
            album_name: "Whenever You Need Somebody".to_string(),
            album_id: "6XhjNHCyCDyyGJRM5mg40G".to_string(),
            is_explicit: false,
            playback_seconds: 213,
            cover_path: Some(format!("covers/{isr_code}.jpg")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_deserializes_backend_json() {
        let json = r#"{
            "isrCode": "USRC17607839",
            "name": "Song",
            "artistName": "Artist",
            "albumName": "Album",
            "albumId": "abc",
            "isExplicit": true,
            "playbackSeconds": 187,
            "coverPath": null
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();

        assert_eq!(track.isr_code, "USRC17607839");
        assert!(track.is_explicit);
        assert_eq!(track.playback_seconds, 187);
        assert_eq!(track.cover_path, None);
    }

    #[test]
    fn register_body_uses_camel_case() {
        let body = serde_json::to_string(&RegisterTrack { isr_code: "USRC17607839" }).unwrap();
        assert_eq!(body, r#"{"isrCode":"USRC17607839"}"#);
    }
}
