use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use jw_db::repositories::user;

use super::model::{RoleUpdatedResponse, UpdateRoleRequest, UserResponse, UsersResponse};
use crate::{
    ApiState, auth::SessionUser, error::ApiError, extract::JsonBody, validation::parse_id,
};

pub const USER_NOT_FOUND: &str = "No User with this ID exists.";

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/admin/users", get(list_users))
        .route(
            "/api/admin/users/{user_id}",
            get(get_user).patch(update_user_role),
        )
}

async fn list_users(State(state): State<ApiState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = user::list_profiles(&state.pool).await?;
    Ok(Json(UsersResponse { users }))
}

async fn get_user(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_id(&user_id, USER_NOT_FOUND)?;

    let user = user::find_profile_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(UserResponse { user }))
}

/// Promote or demote an account. Admins cannot change their own role, so
/// there is always at least one admin left.
async fn update_user_role(
    session: SessionUser,
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    JsonBody(payload): JsonBody<UpdateRoleRequest>,
) -> Result<Json<RoleUpdatedResponse>, ApiError> {
    let user_id = parse_id(&user_id, USER_NOT_FOUND)?;
    let role = payload.validate()?;

    if user_id == session.user_id {
        return Err(ApiError::validation("You cannot change your own role."));
    }

    let user = user::update_role(&state.pool, user_id, role)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    tracing::info!(
        user_id = %user.id,
        role = %user.role,
        changed_by = %session.user_id,
        "User role updated"
    );

    Ok(Json(RoleUpdatedResponse {
        message: "User Role Successfully Updated.",
        user,
    }))
}
