use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{Word, WordInput};

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Word>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, word, meaning, pronunciation, when_to_say, lesson_number, created_by, created_at
            FROM words
            ORDER BY lesson_number, created_at
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Words of one lesson, in the order they were added
pub async fn list_by_lesson<'e, E>(
    executor: E,
    lesson_number: i32,
) -> Result<Vec<Word>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, word, meaning, pronunciation, when_to_say, lesson_number, created_by, created_at
            FROM words
            WHERE lesson_number = $1
            ORDER BY created_at, id
        "#,
    )
    .bind(lesson_number)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, word_id: Uuid) -> Result<Option<Word>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, word, meaning, pronunciation, when_to_say, lesson_number, created_by, created_at
            FROM words
            WHERE id = $1
        "#,
    )
    .bind(word_id)
    .fetch_optional(executor)
    .await
}

/// Whether another word already uses this text. `excluding` skips the word being edited.
pub async fn text_exists<'e, E>(
    executor: E,
    word: &str,
    excluding: Option<Uuid>,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS(
                SELECT 1 FROM words
                WHERE word = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
        "#,
    )
    .bind(word)
    .bind(excluding)
    .fetch_one(executor)
    .await
}

pub async fn create<'e, E>(
    executor: E,
    input: &WordInput,
    created_by: Option<&str>,
) -> Result<Word, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO words (word, meaning, pronunciation, when_to_say, lesson_number, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, word, meaning, pronunciation, when_to_say, lesson_number, created_by, created_at
        "#,
    )
    .bind(&input.word)
    .bind(&input.meaning)
    .bind(&input.pronunciation)
    .bind(&input.when_to_say)
    .bind(input.lesson_number)
    .bind(created_by)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(
    executor: E,
    word_id: Uuid,
    input: &WordInput,
) -> Result<Option<Word>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE words
            SET word = $2,
                meaning = $3,
                pronunciation = $4,
                when_to_say = $5,
                lesson_number = $6
            WHERE id = $1
            RETURNING id, word, meaning, pronunciation, when_to_say, lesson_number, created_by, created_at
        "#,
    )
    .bind(word_id)
    .bind(&input.word)
    .bind(&input.meaning)
    .bind(&input.pronunciation)
    .bind(&input.when_to_say)
    .bind(input.lesson_number)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e, E>(executor: E, word_id: Uuid) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM words WHERE id = $1
        "#,
    )
    .bind(word_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
