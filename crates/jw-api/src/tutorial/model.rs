use jw_db::models::Tutorial;
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    validation::{MAX_TEXT_LENGTH, Violations, is_youtube_link, max_chars, non_blank},
};

pub const INVALID_YOUTUBE_LINK: &str = "Invalid YouTube URL";

/// Body of `POST /api/admin/tutorials`
#[derive(Debug, Default, Deserialize)]
pub struct CreateTutorialRequest {
    pub title: Option<String>,
    pub link: Option<String>,
}

/// Body of `PATCH /api/admin/tutorials/{tutorialId}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTutorialRequest {
    pub title: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewTutorial {
    pub title: String,
    pub link: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TutorialChanges {
    pub title: Option<String>,
    pub link: Option<String>,
}

fn check_title(violations: &mut Violations, title: Option<&str>) -> Option<String> {
    match non_blank(title) {
        None => {
            violations.push("Title is required");
            None
        }
        Some(title) if !max_chars(&title, MAX_TEXT_LENGTH) => {
            violations.push("Title must be at most 255 characters");
            None
        }
        Some(title) => Some(title),
    }
}

fn check_link(violations: &mut Violations, link: Option<&str>) -> Option<String> {
    match non_blank(link) {
        None => {
            violations.push("Link is required");
            None
        }
        Some(link) if !is_youtube_link(&link) => {
            violations.push(INVALID_YOUTUBE_LINK);
            None
        }
        Some(link) => Some(link),
    }
}

impl CreateTutorialRequest {
    pub fn validate(self) -> Result<NewTutorial, ApiError> {
        let mut violations = Violations::new();
        let title = check_title(&mut violations, self.title.as_deref());
        let link = check_link(&mut violations, self.link.as_deref());
        violations.into_result()?;

        Ok(NewTutorial {
            title: title.unwrap_or_default(),
            link: link.unwrap_or_default(),
        })
    }
}

impl UpdateTutorialRequest {
    /// Only the fields present in the body are checked
    pub fn validate(self) -> Result<TutorialChanges, ApiError> {
        if self.title.is_none() && self.link.is_none() {
            return Err(ApiError::validation(
                "Either Title or Link must be specified.",
            ));
        }

        let mut violations = Violations::new();
        let title = match self.title.as_deref() {
            Some(title) => check_title(&mut violations, Some(title)),
            None => None,
        };
        let link = match self.link.as_deref() {
            Some(link) => check_link(&mut violations, Some(link)),
            None => None,
        };
        violations.into_result()?;

        Ok(TutorialChanges { title, link })
    }
}

#[derive(Debug, Serialize)]
pub struct TutorialsResponse {
    pub tutorials: Vec<Tutorial>,
}

#[derive(Debug, Serialize)]
pub struct TutorialResponse {
    pub tutorial: Tutorial,
}

#[derive(Debug, Serialize)]
pub struct TutorialMutationResponse {
    pub message: &'static str,
    pub tutorial: Tutorial,
}
