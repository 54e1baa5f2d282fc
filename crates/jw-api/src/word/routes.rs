use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use jw_db::{
    models::WordInput,
    repositories::{lesson, word},
};
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{WordMutationResponse, WordRequest, WordResponse, WordsResponse};
use crate::{
    ApiState, auth::SessionUser, error::ApiError, extract::JsonBody,
    lesson::routes::LESSON_NOT_FOUND, validation::parse_id,
};

pub const WORD_NOT_FOUND: &str = "No Word with this ID exists.";
const DUPLICATE_WORD: &str = "This word already exists.";

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/admin/words", get(list_words).post(create_word))
        .route(
            "/api/admin/words/{word_id}",
            get(get_word).patch(update_word).delete(delete_word),
        )
}

/// Checks shared by create and update: the text is unused by any other word
/// and the lesson exists. Nothing ties words to lessons in storage, so this
/// is best effort.
async fn check_word(
    pool: &PgPool,
    input: &WordInput,
    excluding: Option<Uuid>,
) -> Result<(), ApiError> {
    if word::text_exists(pool, &input.word, excluding).await? {
        return Err(ApiError::conflict(DUPLICATE_WORD));
    }

    if !lesson::number_exists(pool, input.lesson_number).await? {
        return Err(ApiError::validation(LESSON_NOT_FOUND));
    }

    Ok(())
}

async fn list_words(State(state): State<ApiState>) -> Result<Json<WordsResponse>, ApiError> {
    let words = word::list_all(&state.pool).await?;
    Ok(Json(WordsResponse { words }))
}

async fn get_word(
    State(state): State<ApiState>,
    Path(word_id): Path<String>,
) -> Result<Json<WordResponse>, ApiError> {
    let word_id = parse_id(&word_id, WORD_NOT_FOUND)?;

    let word = word::find_by_id(&state.pool, word_id)
        .await?
        .ok_or_else(|| ApiError::not_found(WORD_NOT_FOUND))?;

    Ok(Json(WordResponse { word }))
}

async fn create_word(
    session: SessionUser,
    State(state): State<ApiState>,
    JsonBody(payload): JsonBody<WordRequest>,
) -> Result<Json<WordMutationResponse>, ApiError> {
    let input = payload.validate()?;
    check_word(&state.pool, &input, None).await?;

    let word = word::create(&state.pool, &input, Some(session.email.as_str())).await?;
    tracing::info!(
        word_id = %word.id,
        lesson_number = word.lesson_number,
        created_by = %session.email,
        "Word created"
    );

    Ok(Json(WordMutationResponse {
        message: "Successfully added the word.",
        word,
    }))
}

/// Replace every field of a word
async fn update_word(
    State(state): State<ApiState>,
    Path(word_id): Path<String>,
    JsonBody(payload): JsonBody<WordRequest>,
) -> Result<Json<WordMutationResponse>, ApiError> {
    let word_id = parse_id(&word_id, WORD_NOT_FOUND)?;
    let input = payload.validate()?;

    if word::find_by_id(&state.pool, word_id).await?.is_none() {
        return Err(ApiError::not_found(WORD_NOT_FOUND));
    }
    check_word(&state.pool, &input, Some(word_id)).await?;

    let word = word::update(&state.pool, word_id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(WORD_NOT_FOUND))?;
    tracing::info!(word_id = %word.id, "Word updated");

    Ok(Json(WordMutationResponse {
        message: "Word Successfully Updated.",
        word,
    }))
}

async fn delete_word(
    State(state): State<ApiState>,
    Path(word_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let word_id = parse_id(&word_id, WORD_NOT_FOUND)?;

    if word::delete(&state.pool, word_id).await? == 0 {
        return Err(ApiError::not_found(WORD_NOT_FOUND));
    }

    tracing::info!(word_id = %word_id, "Word deleted");
    Ok(Json(json!({ "message": "Word Successfully Deleted." })))
}
