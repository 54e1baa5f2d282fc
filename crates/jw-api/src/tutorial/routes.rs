use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use jw_db::repositories::tutorial;
use serde_json::{Value, json};

use super::model::{
    CreateTutorialRequest, TutorialMutationResponse, TutorialResponse, TutorialsResponse,
    UpdateTutorialRequest,
};
use crate::{ApiState, error::ApiError, extract::JsonBody, validation::parse_id};

pub const TUTORIAL_NOT_FOUND: &str = "No Tutorial with this ID exists.";
const DUPLICATE_LINK: &str = "A tutorial with this link already exists.";

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/api/admin/tutorials",
            get(list_tutorials).post(create_tutorial),
        )
        .route(
            "/api/admin/tutorials/{tutorial_id}",
            get(get_tutorial)
                .patch(update_tutorial)
                .delete(delete_tutorial),
        )
        .route("/api/user/tutorials", get(list_tutorials))
}

async fn list_tutorials(
    State(state): State<ApiState>,
) -> Result<Json<TutorialsResponse>, ApiError> {
    let tutorials = tutorial::list_all(&state.pool).await?;
    Ok(Json(TutorialsResponse { tutorials }))
}

async fn get_tutorial(
    State(state): State<ApiState>,
    Path(tutorial_id): Path<String>,
) -> Result<Json<TutorialResponse>, ApiError> {
    let tutorial_id = parse_id(&tutorial_id, TUTORIAL_NOT_FOUND)?;

    let tutorial = tutorial::find_by_id(&state.pool, tutorial_id)
        .await?
        .ok_or_else(|| ApiError::not_found(TUTORIAL_NOT_FOUND))?;

    Ok(Json(TutorialResponse { tutorial }))
}

async fn create_tutorial(
    State(state): State<ApiState>,
    JsonBody(payload): JsonBody<CreateTutorialRequest>,
) -> Result<Json<TutorialMutationResponse>, ApiError> {
    let new_tutorial = payload.validate()?;

    if tutorial::link_exists(&state.pool, &new_tutorial.link, None).await? {
        return Err(ApiError::conflict(DUPLICATE_LINK));
    }

    let tutorial = tutorial::create(&state.pool, &new_tutorial.title, &new_tutorial.link).await?;
    tracing::info!(tutorial_id = %tutorial.id, "Tutorial created");

    Ok(Json(TutorialMutationResponse {
        message: "Successfully added the tutorial.",
        tutorial,
    }))
}

async fn update_tutorial(
    State(state): State<ApiState>,
    Path(tutorial_id): Path<String>,
    JsonBody(payload): JsonBody<UpdateTutorialRequest>,
) -> Result<Json<TutorialMutationResponse>, ApiError> {
    let tutorial_id = parse_id(&tutorial_id, TUTORIAL_NOT_FOUND)?;
    let changes = payload.validate()?;

    if let Some(link) = changes.link.as_deref()
        && tutorial::link_exists(&state.pool, link, Some(tutorial_id)).await?
    {
        return Err(ApiError::conflict(DUPLICATE_LINK));
    }

    let tutorial = tutorial::update(
        &state.pool,
        tutorial_id,
        changes.title.as_deref(),
        changes.link.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found(TUTORIAL_NOT_FOUND))?;
    tracing::info!(tutorial_id = %tutorial.id, "Tutorial updated");

    Ok(Json(TutorialMutationResponse {
        message: "Tutorial Successfully Updated.",
        tutorial,
    }))
}

async fn delete_tutorial(
    State(state): State<ApiState>,
    Path(tutorial_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let tutorial_id = parse_id(&tutorial_id, TUTORIAL_NOT_FOUND)?;

    if tutorial::delete(&state.pool, tutorial_id).await? == 0 {
        return Err(ApiError::not_found(TUTORIAL_NOT_FOUND));
    }

    tracing::info!(tutorial_id = %tutorial_id, "Tutorial deleted");
    Ok(Json(json!({ "message": "Tutorial Successfully Deleted." })))
}
