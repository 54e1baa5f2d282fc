use jw_db::models::{Lesson, LessonSummary, Word};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::ApiError,
    validation::{INVALID_LESSON_NUMBER, MAX_TEXT_LENGTH, max_chars, non_blank, positive_integer},
};

pub const EMPTY_LESSON_NAME: &str = "Lesson Name cannot be empty.";
pub const LONG_LESSON_NAME: &str = "Lesson Name must be at most 255 characters.";

/// Body of `POST /api/admin/lessons`
#[derive(Debug, Deserialize)]
pub struct CreateLessonRequest {
    pub name: Option<String>,
    pub number: Option<Value>,
}

/// Body of `PATCH /api/admin/lessons/{lessonNumber}`
#[derive(Debug, Deserialize)]
pub struct UpdateLessonRequest {
    pub name: Option<String>,
    pub number: Option<Value>,
}

/// Validated lesson creation
#[derive(Debug, PartialEq, Eq)]
pub struct NewLesson {
    pub number: i32,
    pub name: String,
}

/// Validated partial lesson update; at least one field is set
#[derive(Debug, PartialEq, Eq)]
pub struct LessonChanges {
    pub name: Option<String>,
    pub number: Option<i32>,
}

fn check_name_length(name: &str) -> Result<(), ApiError> {
    if max_chars(name, MAX_TEXT_LENGTH) {
        Ok(())
    } else {
        Err(ApiError::validation(LONG_LESSON_NAME))
    }
}

impl CreateLessonRequest {
    pub fn validate(self) -> Result<NewLesson, ApiError> {
        let name = non_blank(self.name.as_deref())
            .ok_or_else(|| ApiError::validation(EMPTY_LESSON_NAME))?;
        check_name_length(&name)?;
        let number = self
            .number
            .as_ref()
            .and_then(positive_integer)
            .ok_or_else(|| ApiError::validation(INVALID_LESSON_NUMBER))?;

        Ok(NewLesson { number, name })
    }
}

impl UpdateLessonRequest {
    /// A blank name or a null number counts as not given, so the name is
    /// left alone when only the number changes.
    pub fn validate(self) -> Result<LessonChanges, ApiError> {
        let name = non_blank(self.name.as_deref());
        let number = self.number.filter(|value| !value.is_null());

        if name.is_none() && number.is_none() {
            return Err(ApiError::validation(
                "Either Lesson Name or Lesson Number must be specified.",
            ));
        }

        if let Some(name) = &name {
            check_name_length(name)?;
        }

        let number = match number {
            Some(value) => Some(
                positive_integer(&value)
                    .ok_or_else(|| ApiError::validation(INVALID_LESSON_NUMBER))?,
            ),
            None => None,
        };

        Ok(LessonChanges { name, number })
    }
}

#[derive(Debug, Serialize)]
pub struct LessonsResponse {
    pub lessons: Vec<LessonSummary>,
}

#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub lesson: LessonSummary,
}

/// A lesson with its vocabulary, as shown to learners
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonWithWords {
    pub id: Uuid,
    pub number: i32,
    pub name: String,
    pub words: Vec<Word>,
}

impl LessonWithWords {
    pub fn new(lesson: Lesson, words: Vec<Word>) -> Self {
        Self {
            id: lesson.id,
            number: lesson.number,
            name: lesson.name,
            words,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LessonDetailResponse {
    pub lesson: LessonWithWords,
}

#[derive(Debug, Serialize)]
pub struct LessonMutationResponse {
    pub message: &'static str,
    pub lesson: Lesson,
}
