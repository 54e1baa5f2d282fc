use axum::{
    Json, Router, http::StatusCode, middleware, response::IntoResponse, routing::get,
};
use serde_json::json;

use crate::{auth, lesson, practice, state::ApiState, tutorial, user, word};

/// Build the application router with the session gate in front of every
/// route, including unmatched paths.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(auth::routes())
        .merge(lesson::routes())
        .merge(word::routes())
        .merge(tutorial::routes())
        .merge(user::routes())
        .merge(practice::routes())
        .fallback(handler_404)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::session_gate,
        ))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "The requested resource was not found" })),
    )
}
