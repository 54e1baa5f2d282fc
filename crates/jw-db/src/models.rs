use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level of an account. Stored as the `user_role` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Standard,
    Admin,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Full user row, including the credential hash. Never serialized.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user, safe to return from the API
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
            photo_url: record.photo_url,
            created_at: record.created_at,
        }
    }
}

/// Lesson model - a numbered unit grouping vocabulary words
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Uuid,
    /// User-facing ordering key, unique across lessons
    pub number: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Lesson together with the number of words that reference it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary {
    pub id: Uuid,
    pub number: i32,
    pub name: String,
    pub vocabulary_count: i64,
}

/// Vocabulary word belonging to a lesson via `lesson_number`
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: Uuid,
    pub word: String,
    pub meaning: String,
    pub pronunciation: String,
    pub when_to_say: String,
    pub lesson_number: i32,
    /// Email of the admin that added the word
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated field set used to insert or replace a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInput {
    pub word: String,
    pub meaning: String,
    pub pronunciation: String,
    pub when_to_say: String,
    pub lesson_number: i32,
}

/// Video tutorial
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" Standard ".parse::<Role>(), Ok(Role::Standard));
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::Standard.to_string(), "standard");
    }

    #[test]
    fn test_profile_hides_password_hash() {
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: "Hana".to_string(),
            email: "hana@example.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            role: Role::Standard,
            photo_url: "https://i.ibb.co/x/hana.png".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserProfile::from(record)).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("photoUrl"));
    }
}
