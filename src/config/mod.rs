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

//! Application configuration.
//!
//! This module manages the application configuration file. The only setting
//! is the backend base URL, which the `TRACKER_BACKEND_API` environment
//! variable overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "trackerui";

pub(crate) const BACKEND_ENV: &str = "TRACKER_BACKEND_API";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/tracker";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub version: u32,
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Applies an environment override for the base URL, blank values are
    /// ignored.
    pub(crate) fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        self
    }
}

pub fn load_config() -> AppConfig {
    let config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    config.with_base_url_override(std::env::var(BACKEND_ENV).ok())
}

/// Directory holding the configuration file, log files go alongside it.
pub(crate) fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(AppConfig::default().base_url, "http://localhost:8080/tracker");
    }

    #[test]
    fn environment_overrides_file() {
        let config = AppConfig::default()
            .with_base_url_override(Some(" https://tracker.example.com ".to_string()));
        assert_eq!(config.base_url, "https://tracker.example.com");
    }

    #[test]
    fn blank_or_missing_override_is_ignored() {
        let config = AppConfig::default().with_base_url_override(Some("   ".to_string()));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::default().with_base_url_override(None);
        assert_eq!(config, AppConfig::default());
    }
}
