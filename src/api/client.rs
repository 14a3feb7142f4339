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

//! Blocking HTTP client for the tracker backend.
//!
//! This is the raw transport: it knows the endpoints, attaches credentials
//! and maps responses to [`ApiError`]s. Caching lives one level up in
//! [`crate::api::TrackService`].
//!
//! All calls block the calling thread, they are only ever made from the task
//! worker.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::{
    StatusCode,
    blocking::{Client, RequestBuilder, Response},
    header::ACCEPT,
};
use tracing::{debug, info};

use crate::{
    api::ApiError,
    model::{RegisterTrack, Track, session::Credentials},
};

const API_PREFIX: &str = "/api/v1";

/// Whether a registration created the track or found it already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Registration {
    Created,
    Existing,
}

pub(crate) struct TrackerClient {
    http: Client,
    api_url: String,
}

impl TrackerClient {
    /// Creates a client for the backend rooted at `base_url`.
    ///
    /// No request timeout is configured, a request that never answers keeps
    /// its view loading.
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: format!("{}{}", base_url.trim_end_matches('/'), API_PREFIX),
        })
    }

    pub(crate) fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Checks credentials by probing the track collection.
    ///
    /// Only 401/403 mean the credentials were refused. A 5xx means the
    /// backend could not tell us either way and is reported as a service
    /// error, so the login fails. Any other answer got past authentication.
    /// The status rules are recorded under "Login probe semantics" in
    /// DESIGN.md.
    pub(crate) fn probe_login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self
            .http
            .get(self.url("/tracks"))
            .header(ACCEPT, "application/json");

        let response = send(request, Some(credentials))?;
        let status = response.status();
        info!(status = status.as_u16(), "Login probe answered");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth {
                status: status.as_u16(),
            }),
            s if s.is_server_error() => Err(error_from(response)),
            _ => Ok(()),
        }
    }

    pub(crate) fn get_track(
        &self,
        credentials: Option<&Credentials>,
        isr_code: &str,
    ) -> Result<Track, ApiError> {
        let request = self
            .http
            .get(self.url(&format!("/tracks/{}", urlencoding::encode(isr_code))))
            .header(ACCEPT, "application/json");

        let response = check(send(request, credentials)?)?;
        decode_track(response)
    }

    pub(crate) fn register_track(
        &self,
        credentials: Option<&Credentials>,
        isr_code: &str,
    ) -> Result<(Track, Registration), ApiError> {
        let request = self
            .http
            .post(self.url("/tracks"))
            .header(ACCEPT, "application/json")
            .json(&RegisterTrack { isr_code });

        let response = check(send(request, credentials)?)?;
        let registration = if response.status() == StatusCode::CREATED {
            Registration::Created
        } else {
            Registration::Existing
        };

        Ok((decode_track(response)?, registration))
    }

    pub(crate) fn get_cover(
        &self,
        credentials: Option<&Credentials>,
        isr_code: &str,
    ) -> Result<Arc<[u8]>, ApiError> {
        let request = self.http.get(self.url(&format!(
            "/tracks/{}/cover",
            urlencoding::encode(isr_code)
        )));

        let response = check(send(request, credentials)?)?;
        let bytes = response
            .bytes()
            .map_err(|e| ApiError::Network { cause: e.to_string() })?;

        Ok(Arc::from(bytes.as_ref()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn send(request: RequestBuilder, credentials: Option<&Credentials>) -> Result<Response, ApiError> {
    let request = match credentials {
        Some(c) => request.basic_auth(&c.username, Some(&c.password)),
        None => request,
    };

    let response = request
        .send()
        .map_err(|e| ApiError::Network { cause: e.to_string() })?;

    debug!(url = %response.url(), status = response.status().as_u16(), "Response received");
    Ok(response)
}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(error_from(response))
    }
}

fn error_from(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    ApiError::from_status(status, &body)
}

fn decode_track(response: Response) -> Result<Track, ApiError> {
    let bytes = response
        .bytes()
        .map_err(|e| ApiError::Network { cause: e.to_string() })?;

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
