use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

pub const INVALID_LESSON_NUMBER: &str = "Lesson Number must be a positive integer.";

/// Column width of the short text fields: user names, lesson names, words
/// and tutorial titles.
pub const MAX_TEXT_LENGTH: usize = 255;

static YOUTUBE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?(youtube\.com/watch\?v=|youtu\.be/)[A-Za-z0-9_-]{11}$")
        .expect("YouTube link pattern is valid")
});

/// Collects every problem found in a request body so they can be reported
/// together, one per line.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0.join("\n")))
        }
    }
}

/// Trimmed text, or `None` when missing or blank
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

/// Whether `value` fits in `limit` characters, counted the way Postgres
/// counts `VARCHAR` length
pub fn max_chars(value: &str, limit: usize) -> bool {
    value.chars().count() <= limit
}

/// Parse a positive integer from a JSON value.
///
/// Accepts either a JSON number or a string holding one, since form
/// inputs on the web client send numbers as text.
///
/// ```
/// use jw_api::validation::positive_integer;
/// use serde_json::json;
///
/// assert_eq!(positive_integer(&json!(3)), Some(3));
/// assert_eq!(positive_integer(&json!("12")), Some(12));
/// assert_eq!(positive_integer(&json!(0)), None);
/// assert_eq!(positive_integer(&json!(1.5)), None);
/// ```
pub fn positive_integer(value: &Value) -> Option<i32> {
    let number = match value {
        Value::Number(number) => number.as_i64()?,
        Value::String(text) => text.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    i32::try_from(number).ok().filter(|n| *n > 0)
}

/// Parse a lesson number taken from a URL path segment
pub fn parse_lesson_number(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ApiError::validation(INVALID_LESSON_NUMBER))
}

/// Parse a record id from a URL path segment.
///
/// A malformed id cannot match any record, so it is reported with the same
/// not-found message as an unknown one.
pub fn parse_id(raw: &str, not_found_message: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::not_found(not_found_message))
}

pub fn is_youtube_link(link: &str) -> bool {
    YOUTUBE_LINK.is_match(link)
}
