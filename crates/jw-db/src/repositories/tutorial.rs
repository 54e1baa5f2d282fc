use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::Tutorial;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Tutorial>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, title, link, created_at
            FROM tutorials
            ORDER BY created_at
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(
    executor: E,
    tutorial_id: Uuid,
) -> Result<Option<Tutorial>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, title, link, created_at
            FROM tutorials
            WHERE id = $1
        "#,
    )
    .bind(tutorial_id)
    .fetch_optional(executor)
    .await
}

pub async fn link_exists<'e, E>(
    executor: E,
    link: &str,
    excluding: Option<Uuid>,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS(
                SELECT 1 FROM tutorials
                WHERE link = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
        "#,
    )
    .bind(link)
    .bind(excluding)
    .fetch_one(executor)
    .await
}

pub async fn create<'e, E>(executor: E, title: &str, link: &str) -> Result<Tutorial, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO tutorials (title, link)
            VALUES ($1, $2)
            RETURNING id, title, link, created_at
        "#,
    )
    .bind(title)
    .bind(link)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(
    executor: E,
    tutorial_id: Uuid,
    title: Option<&str>,
    link: Option<&str>,
) -> Result<Option<Tutorial>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE tutorials
            SET title = COALESCE($2, title),
                link = COALESCE($3, link)
            WHERE id = $1
            RETURNING id, title, link, created_at
        "#,
    )
    .bind(tutorial_id)
    .bind(title)
    .bind(link)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e, E>(executor: E, tutorial_id: Uuid) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM tutorials WHERE id = $1
        "#,
    )
    .bind(tutorial_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
