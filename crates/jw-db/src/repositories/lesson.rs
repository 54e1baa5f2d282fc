use sqlx::{Executor, Postgres};

use crate::models::{Lesson, LessonSummary};

/// All lessons ordered by number, each with its word count
pub async fn list_summaries<'e, E>(executor: E) -> Result<Vec<LessonSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT l.id, l.number, l.name, COUNT(w.id) AS vocabulary_count
            FROM lessons l
            LEFT JOIN words w ON w.lesson_number = l.number
            GROUP BY l.id, l.number, l.name
            ORDER BY l.number
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_summary_by_number<'e, E>(
    executor: E,
    number: i32,
) -> Result<Option<LessonSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT l.id, l.number, l.name, COUNT(w.id) AS vocabulary_count
            FROM lessons l
            LEFT JOIN words w ON w.lesson_number = l.number
            WHERE l.number = $1
            GROUP BY l.id, l.number, l.name
        "#,
    )
    .bind(number)
    .fetch_optional(executor)
    .await
}

pub async fn find_by_number<'e, E>(executor: E, number: i32) -> Result<Option<Lesson>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, number, name, created_at
            FROM lessons
            WHERE number = $1
        "#,
    )
    .bind(number)
    .fetch_optional(executor)
    .await
}

pub async fn number_exists<'e, E>(executor: E, number: i32) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS(SELECT 1 FROM lessons WHERE number = $1)
        "#,
    )
    .bind(number)
    .fetch_one(executor)
    .await
}

pub async fn create<'e, E>(executor: E, number: i32, name: &str) -> Result<Lesson, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO lessons (number, name)
            VALUES ($1, $2)
            RETURNING id, number, name, created_at
        "#,
    )
    .bind(number)
    .bind(name)
    .fetch_one(executor)
    .await
}

/// Apply a partial update to the lesson currently numbered `number`.
/// `None` fields keep their stored value.
pub async fn update<'e, E>(
    executor: E,
    number: i32,
    new_name: Option<&str>,
    new_number: Option<i32>,
) -> Result<Option<Lesson>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE lessons
            SET name = COALESCE($2, name),
                number = COALESCE($3, number)
            WHERE number = $1
            RETURNING id, number, name, created_at
        "#,
    )
    .bind(number)
    .bind(new_name)
    .bind(new_number)
    .fetch_optional(executor)
    .await
}

pub async fn delete_by_number<'e, E>(executor: E, number: i32) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM lessons WHERE number = $1
        "#,
    )
    .bind(number)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
