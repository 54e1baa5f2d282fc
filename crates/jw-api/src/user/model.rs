use jw_db::models::{Role, UserProfile};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `PATCH /api/admin/users/{userId}`
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Option<String>,
}

impl UpdateRoleRequest {
    pub fn validate(self) -> Result<Role, ApiError> {
        let role = self
            .role
            .filter(|role| !role.trim().is_empty())
            .ok_or_else(|| ApiError::validation("Role is required."))?;

        role.parse::<Role>()
            .map_err(|_| ApiError::validation("Role must be either 'standard' or 'admin'."))
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct RoleUpdatedResponse {
    pub message: &'static str,
    pub user: UserProfile,
}
