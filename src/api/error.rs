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

//! Error taxonomy for backend operations.
//!
//! Every failure is terminal for the operation that triggered it. Variants
//! only differ in how they are presented, there is no per-variant recovery.

use serde::Deserialize;
use thiserror::Error;

pub(crate) const GENERIC_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ApiError {
    /// Rejected locally, no request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid username or password. Please try again.")]
    Auth { status: u16 },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest { status: u16, message: String },

    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("Cannot connect to the server. Please check your connection.")]
    Network { cause: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success HTTP status and its body to an error.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = problem_message(body);
        match status {
            401 | 403 => ApiError::Auth { status },
            404 => ApiError::NotFound { message },
            500..=599 => ApiError::Service { status, message },
            _ => ApiError::BadRequest { status, message },
        }
    }

    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status }
            | ApiError::BadRequest { status, .. }
            | ApiError::Service { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Validation(_) | ApiError::Network { .. } | ApiError::Decode(_) => None,
        }
    }

    /// Heading used when the error is shown in an error panel.
    pub(crate) fn title(&self) -> &'static str {
        match self.status() {
            Some(404) => "Track Not Found",
            Some(503) => "Service Unavailable",
            _ => "Something Went Wrong",
        }
    }
}

#[derive(Deserialize)]
struct ProblemDetail {
    detail: Option<String>,
}

/// Extracts a human-readable message from an error response body.
///
/// The backend answers with RFC 7807 problem documents, the `detail` field is
/// preferred. Anything else non-empty is shown as-is.
pub(crate) fn problem_message(body: &str) -> String {
    if let Ok(ProblemDetail {
        detail: Some(detail),
    }) = serde_json::from_str::<ProblemDetail>(body)
    {
        return detail;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_variants() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Auth { status: 401 });
        assert_eq!(ApiError::from_status(403, ""), ApiError::Auth { status: 403 });
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound { .. }));
        assert!(matches!(
            ApiError::from_status(400, ""),
            ApiError::BadRequest { status: 400, .. }
        ));
        assert!(matches!(
            ApiError::from_status(503, ""),
            ApiError::Service { status: 503, .. }
        ));
        assert!(matches!(
            ApiError::from_status(500, ""),
            ApiError::Service { status: 500, .. }
        ));
    }

    #[test]
    fn problem_detail_is_preferred() {
        let body = r#"{"title":"Track Not Found","status":404,"detail":"Track not found: XX"}"#;
        let err = ApiError::from_status(404, body);
        assert_eq!(err.to_string(), "Track not found: XX");
    }

    #[test]
    fn plain_body_and_empty_body() {
        assert_eq!(problem_message("  upstream exploded "), "upstream exploded");
        assert_eq!(problem_message(""), GENERIC_MESSAGE);
        assert_eq!(problem_message(r#"{"title":"No detail"}"#), r#"{"title":"No detail"}"#);
    }

    #[test]
    fn titles_follow_status() {
        assert_eq!(ApiError::from_status(404, "").title(), "Track Not Found");
        assert_eq!(ApiError::from_status(503, "").title(), "Service Unavailable");
        assert_eq!(ApiError::from_status(500, "").title(), "Something Went Wrong");
        assert_eq!(
            ApiError::Network { cause: "refused".into() }.title(),
            "Something Went Wrong"
        );
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(
            ApiError::Auth { status: 401 }.to_string(),
            "Invalid username or password. Please try again."
        );
        assert_eq!(
            ApiError::Network { cause: "refused".into() }.to_string(),
            "Cannot connect to the server. Please check your connection."
        );
        assert_eq!(ApiError::Network { cause: "x".into() }.status(), None);
    }
}
