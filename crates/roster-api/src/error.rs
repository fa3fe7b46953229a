//! Error types for the roster HTTP layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::RosterError;
use tracing::warn;

/// Errors that can occur in the roster API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A registry operation was rejected.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A required query parameter was missing.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The query string could not be deserialized.
    #[error("invalid query: {}", .0.body_text())]
    Query(#[from] QueryRejection),

    /// A path segment could not be extracted.
    #[error("invalid path: {}", .0.body_text())]
    Path(#[from] PathRejection),
}

impl ApiError {
    /// The HTTP status this error maps to.
    ///
    /// Extractor rejections keep the status axum assigned them: 400 for
    /// bad input, 500 for a route/extractor mismatch.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Roster(err) => match err {
                RosterError::ActivityNotFound(_) | RosterError::NotRegistered { .. } => {
                    StatusCode::NOT_FOUND
                }
                RosterError::AlreadyRegistered { .. } | RosterError::ActivityFull { .. } => {
                    StatusCode::CONFLICT
                }
                RosterError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                RosterError::DuplicateActivity(_)
                | RosterError::DuplicateSeedParticipant { .. }
                | RosterError::SeedOverCapacity { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Query(rejection) => rejection.status(),
            Self::Path(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        } else {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_map_to_statuses() {
        let cases = [
            (
                ApiError::from(RosterError::ActivityNotFound(String::from("X"))),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(RosterError::NotRegistered {
                    email: String::from("a@b.com"),
                    activity: String::from("X"),
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(RosterError::AlreadyRegistered {
                    email: String::from("a@b.com"),
                    activity: String::from("X"),
                }),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(RosterError::ActivityFull {
                    activity: String::from("X"),
                    capacity: 1,
                }),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(RosterError::InvalidEmail(String::from("nope"))),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::InvalidQuery(String::from("missing email")),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err}");
        }
    }

    #[test]
    fn response_carries_status() {
        let response =
            ApiError::from(RosterError::ActivityNotFound(String::from("X"))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn response_body_is_json() {
        let response = ApiError::InvalidQuery(String::from("missing required parameter: email"))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "invalid query: missing required parameter: email");
    }
}
