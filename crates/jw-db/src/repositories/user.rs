use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{Role, UserProfile, UserRecord};

pub async fn find_by_email<'e, E>(
    executor: E,
    email: &str,
) -> Result<Option<UserRecord>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, email, password_hash, role, photo_url, created_at
            FROM users
            WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

pub async fn email_exists<'e, E>(executor: E, email: &str) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
        "#,
    )
    .bind(email)
    .fetch_one(executor)
    .await
}

pub async fn find_profile_by_id<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, email, role, photo_url, created_at
            FROM users
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_profiles<'e, E>(executor: E) -> Result<Vec<UserProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, email, role, photo_url, created_at
            FROM users
            ORDER BY created_at
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn create_user<'e, E>(
    executor: E,
    name: &str,
    email: &str,
    password_hash: &str,
    photo_url: &str,
    role: Role,
) -> Result<Uuid, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO users (name, email, password_hash, photo_url, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(photo_url)
    .bind(role)
    .fetch_one(executor)
    .await
}

/// Change a user's role, returning the updated profile or `None` if no such user exists
pub async fn update_role<'e, E>(
    executor: E,
    user_id: Uuid,
    role: Role,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE users
            SET role = $1
            WHERE id = $2
            RETURNING id, name, email, role, photo_url, created_at
        "#,
    )
    .bind(role)
    .bind(user_id)
    .fetch_optional(executor)
    .await
}
