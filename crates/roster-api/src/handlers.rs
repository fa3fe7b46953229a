//! REST API endpoint handlers for the roster server.
//!
//! All handlers go through the [`ActivityRegistry`](roster_core::ActivityRegistry)
//! held in the shared [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the web front-end |
//! | `GET` | `/health` | Liveness check |
//! | `GET` | `/activities` | All activities keyed by name |
//! | `GET` | `/activities/{activity}` | Single activity |
//! | `POST` | `/activities/{activity}/signup?email=` | Enroll a participant |
//! | `DELETE` | `/activities/{activity}/participants?email=` | Remove a participant |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use roster_core::{Activity, ParticipantEmail};

use crate::error::ApiError;
use crate::extract::{ApiPath, ApiQuery};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter / response structs
// ---------------------------------------------------------------------------

/// Query parameters for the signup and unregister endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct EmailQuery {
    /// The participant's email address.
    pub email: Option<String>,
}

impl EmailQuery {
    /// Validate and normalize the `email` parameter.
    fn participant(&self) -> Result<ParticipantEmail, ApiError> {
        let raw = self
            .email
            .as_deref()
            .ok_or_else(|| ApiError::InvalidQuery("missing required parameter: email".to_owned()))?;
        Ok(ParticipantEmail::parse(raw)?)
    }
}

/// Confirmation body for successful mutations.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

// ---------------------------------------------------------------------------
// GET / -- redirect to the front-end
// ---------------------------------------------------------------------------

/// Redirect the bare root to the bundled web page.
pub async fn index() -> Redirect {
    Redirect::to("/static/index.html")
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report liveness and the number of activities served.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "activities": state.registry.len().await,
    }))
}

// ---------------------------------------------------------------------------
// GET /activities
// ---------------------------------------------------------------------------

/// Return every activity keyed by name, with description, schedule,
/// capacity, and current participants.
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry.list().await)
}

// ---------------------------------------------------------------------------
// GET /activities/{activity}
// ---------------------------------------------------------------------------

/// Return a single activity by name.
pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    ApiPath(activity): ApiPath<String>,
) -> Result<Json<Activity>, ApiError> {
    Ok(Json(state.registry.get(&activity).await?))
}

// ---------------------------------------------------------------------------
// POST /activities/{activity}/signup
// ---------------------------------------------------------------------------

/// Enroll the `email` query parameter in `activity`.
///
/// Fails with 404 for an unknown activity, 400 for a missing or malformed
/// email or an undecodable path or query, and 409 when the email is
/// already enrolled or the activity is full.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ApiPath(activity): ApiPath<String>,
    ApiQuery(params): ApiQuery<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = params.participant()?;

    state.registry.signup(&activity, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {activity}"),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /activities/{activity}/participants
// ---------------------------------------------------------------------------

/// Remove the `email` query parameter from `activity`.
///
/// Fails with 404 for an unknown activity or a non-enrolled email and 400
/// for a missing or malformed email or an undecodable path or query.
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    ApiPath(activity): ApiPath<String>,
    ApiQuery(params): ApiQuery<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = params.participant()?;

    state.registry.unregister(&activity, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {activity}"),
    }))
}
