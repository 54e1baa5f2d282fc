use jw_db::models::{Word, WordInput};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::ApiError,
    validation::{
        INVALID_LESSON_NUMBER, MAX_TEXT_LENGTH, Violations, max_chars, non_blank, positive_integer,
    },
};

/// Body of word create and update requests; every field is required
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRequest {
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub pronunciation: Option<String>,
    pub when_to_say: Option<String>,
    pub lesson_number: Option<Value>,
}

/// Trimmed value of a required text field, recording a violation when blank
fn required(violations: &mut Violations, value: Option<&str>, message: &str) -> String {
    non_blank(value).unwrap_or_else(|| {
        violations.push(message);
        String::new()
    })
}

impl WordRequest {
    /// Check every field and report all problems at once
    pub fn validate(self) -> Result<WordInput, ApiError> {
        let mut violations = Violations::new();

        let word = required(&mut violations, self.word.as_deref(), "Word is required");
        if !max_chars(&word, MAX_TEXT_LENGTH) {
            violations.push("Word must be at most 255 characters");
        }
        let meaning = required(&mut violations, self.meaning.as_deref(), "Meaning is required");
        let pronunciation = required(
            &mut violations,
            self.pronunciation.as_deref(),
            "Pronunciation is required",
        );
        let when_to_say = required(
            &mut violations,
            self.when_to_say.as_deref(),
            "'When To Say' is required",
        );

        let lesson_number = match self.lesson_number.as_ref() {
            None | Some(Value::Null) => {
                violations.push("Lesson Number is required");
                0
            }
            Some(value) => positive_integer(value).unwrap_or_else(|| {
                violations.push(INVALID_LESSON_NUMBER);
                0
            }),
        };

        violations.into_result()?;

        Ok(WordInput {
            word,
            meaning,
            pronunciation,
            when_to_say,
            lesson_number,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub words: Vec<Word>,
}

#[derive(Debug, Serialize)]
pub struct WordResponse {
    pub word: Word,
}

#[derive(Debug, Serialize)]
pub struct WordMutationResponse {
    pub message: &'static str,
    pub word: Word,
}
