//! Axum router construction for the roster API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the roster server.
///
/// The router includes:
/// - `GET /` -- redirect to `/static/index.html`
/// - `GET /health` -- liveness check
/// - `GET /activities` -- all activities
/// - `GET /activities/{activity}` -- single activity
/// - `POST /activities/{activity}/signup` -- enroll `?email=`
/// - `DELETE /activities/{activity}/participants` -- remove `?email=`
/// - `GET /static/*` -- web front-end files
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Front-end
        .route("/", get(handlers::index))
        .nest_service("/static", static_files)
        // Health
        .route("/health", get(handlers::health))
        // REST API
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{activity}", get(handlers::get_activity))
        .route("/activities/{activity}/signup", post(handlers::signup))
        .route(
            "/activities/{activity}/participants",
            delete(handlers::unregister),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
