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

//! File-based tracing setup.
//!
//! The terminal is owned by the TUI, so log output goes to a file next to the
//! configuration file. `RUST_LOG` controls the filter, defaulting to `info`.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config;

const LOG_FILE: &str = "trackerui.log";

/// Installs the global tracing subscriber, returning the log file path.
pub(crate) fn init_logging() -> Result<PathBuf> {
    let dir = config::config_dir().unwrap_or_else(std::env::temp_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}
