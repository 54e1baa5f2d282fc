use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use jw_db::{
    models::{Lesson, Word},
    repositories::{lesson, word},
};
use jw_practice::{Completion, Controls, FlashcardSession};
use serde::{Deserialize, Serialize};

use crate::{
    ApiState, error::ApiError, lesson::routes::LESSON_NOT_FOUND,
    metrics::record_lesson_completed, validation::parse_lesson_number,
};

const PAGE_OUT_OF_RANGE: &str = "Page is out of range.";

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/api/user/lessons/{lesson_number}/practice",
            get(practice_page),
        )
        .route(
            "/api/user/lessons/{lesson_number}/practice/complete",
            post(complete_lesson),
        )
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Requested 1-based card position, defaulting to the first card
    fn position(&self) -> Result<usize, ApiError> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| ApiError::validation(PAGE_OUT_OF_RANGE)),
        }
    }
}

/// One flashcard of a lesson with the navigation around it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PracticePage {
    lesson_number: i32,
    lesson_name: String,
    page: Option<usize>,
    total_pages: usize,
    previous_page: Option<usize>,
    next_page: Option<usize>,
    controls: Controls,
    word: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completion: Option<Completion>,
}

impl PracticePage {
    fn new(lesson: Lesson, session: &FlashcardSession<Word>) -> Self {
        let pager = session.pager();
        Self {
            lesson_number: lesson.number,
            lesson_name: lesson.name,
            page: pager.current_page(),
            total_pages: pager.number_of_pages(),
            previous_page: pager.previous_page(),
            next_page: pager.next_page(),
            controls: session.controls(),
            word: session.current().cloned(),
            completion: session.complete().ok(),
        }
    }
}

/// Load a lesson and open a practice session on the requested card.
///
/// A lesson without words yields an empty session whatever page was asked
/// for.
async fn open_session(
    state: &ApiState,
    lesson_number: &str,
    query: &PageQuery,
) -> Result<(Lesson, FlashcardSession<Word>), ApiError> {
    let number = parse_lesson_number(lesson_number)?;
    let position = query.position()?;

    let lesson = lesson::find_by_number(&state.pool, number)
        .await?
        .ok_or_else(|| ApiError::not_found(LESSON_NOT_FOUND))?;
    let words = word::list_by_lesson(&state.pool, number).await?;

    let session = if words.is_empty() {
        FlashcardSession::new(words)
    } else {
        FlashcardSession::starting_at(words, position)
            .map_err(|_| ApiError::validation(PAGE_OUT_OF_RANGE))?
    };

    Ok((lesson, session))
}

async fn practice_page(
    State(state): State<ApiState>,
    Path(lesson_number): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PracticePage>, ApiError> {
    let (lesson, session) = open_session(&state, &lesson_number, &query).await?;
    Ok(Json(PracticePage::new(lesson, &session)))
}

/// Finish a lesson from its last card
async fn complete_lesson(
    State(state): State<ApiState>,
    Path(lesson_number): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Completion>, ApiError> {
    let (lesson, session) = open_session(&state, &lesson_number, &query).await?;

    let completion = session.complete().map_err(|_| {
        ApiError::validation("Lesson can only be completed from the last card.")
    })?;

    record_lesson_completed(lesson.number);
    tracing::info!(lesson_number = lesson.number, "Lesson completed");

    Ok(Json(completion))
}
