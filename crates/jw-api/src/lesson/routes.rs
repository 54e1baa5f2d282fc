use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use jw_db::repositories::{lesson, word};
use serde_json::{Value, json};

use super::model::{
    CreateLessonRequest, LessonDetailResponse, LessonMutationResponse, LessonResponse,
    LessonWithWords, LessonsResponse, UpdateLessonRequest,
};
use crate::{ApiState, error::ApiError, extract::JsonBody, validation::parse_lesson_number};

pub const LESSON_NOT_FOUND: &str = "No Lesson with this lesson number exists.";

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/admin/lessons", get(list_lessons).post(create_lesson))
        .route(
            "/api/admin/lessons/{lesson_number}",
            get(get_lesson).patch(update_lesson).delete(delete_lesson),
        )
        .route("/api/user/lessons", get(list_lessons))
        .route("/api/user/lessons/{lesson_number}", get(get_lesson_with_words))
}

/// All lessons by number, each with its vocabulary count
async fn list_lessons(State(state): State<ApiState>) -> Result<Json<LessonsResponse>, ApiError> {
    let lessons = lesson::list_summaries(&state.pool).await?;
    Ok(Json(LessonsResponse { lessons }))
}

async fn get_lesson(
    State(state): State<ApiState>,
    Path(lesson_number): Path<String>,
) -> Result<Json<LessonResponse>, ApiError> {
    let number = parse_lesson_number(&lesson_number)?;

    let lesson = lesson::find_summary_by_number(&state.pool, number)
        .await?
        .ok_or_else(|| ApiError::not_found(LESSON_NOT_FOUND))?;

    Ok(Json(LessonResponse { lesson }))
}

async fn get_lesson_with_words(
    State(state): State<ApiState>,
    Path(lesson_number): Path<String>,
) -> Result<Json<LessonDetailResponse>, ApiError> {
    let number = parse_lesson_number(&lesson_number)?;

    let lesson = lesson::find_by_number(&state.pool, number)
        .await?
        .ok_or_else(|| ApiError::not_found(LESSON_NOT_FOUND))?;
    let words = word::list_by_lesson(&state.pool, number).await?;

    Ok(Json(LessonDetailResponse {
        lesson: LessonWithWords::new(lesson, words),
    }))
}

async fn create_lesson(
    State(state): State<ApiState>,
    JsonBody(payload): JsonBody<CreateLessonRequest>,
) -> Result<Json<LessonMutationResponse>, ApiError> {
    let new_lesson = payload.validate()?;

    if lesson::number_exists(&state.pool, new_lesson.number).await? {
        return Err(ApiError::conflict(
            "A lesson with this lesson number already exists.",
        ));
    }

    let lesson = lesson::create(&state.pool, new_lesson.number, &new_lesson.name).await?;
    tracing::info!(lesson_number = lesson.number, "Lesson created");

    Ok(Json(LessonMutationResponse {
        message: "Successfully added the lesson.",
        lesson,
    }))
}

/// Rename and/or renumber a lesson. Words keep their stored lesson number.
async fn update_lesson(
    State(state): State<ApiState>,
    Path(lesson_number): Path<String>,
    JsonBody(payload): JsonBody<UpdateLessonRequest>,
) -> Result<Json<LessonMutationResponse>, ApiError> {
    let number = parse_lesson_number(&lesson_number)?;
    let changes = payload.validate()?;

    if !lesson::number_exists(&state.pool, number).await? {
        return Err(ApiError::not_found(LESSON_NOT_FOUND));
    }

    if let Some(new_number) = changes.number
        && new_number != number
        && lesson::number_exists(&state.pool, new_number).await?
    {
        return Err(ApiError::conflict(
            "A lesson with desired lesson number already exists.",
        ));
    }

    let lesson = lesson::update(
        &state.pool,
        number,
        changes.name.as_deref(),
        changes.number,
    )
    .await?
    .ok_or_else(|| ApiError::not_found(LESSON_NOT_FOUND))?;

    tracing::info!(
        from = number,
        to = lesson.number,
        "Lesson updated"
    );

    Ok(Json(LessonMutationResponse {
        message: "Lesson Successfully Updated.",
        lesson,
    }))
}

/// Delete a lesson. Its words are left in place.
async fn delete_lesson(
    State(state): State<ApiState>,
    Path(lesson_number): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let number = parse_lesson_number(&lesson_number)?;

    if lesson::delete_by_number(&state.pool, number).await? == 0 {
        return Err(ApiError::not_found(LESSON_NOT_FOUND));
    }

    tracing::info!(lesson_number = number, "Lesson deleted");
    Ok(Json(json!({ "message": "Lesson Successfully Deleted." })))
}
