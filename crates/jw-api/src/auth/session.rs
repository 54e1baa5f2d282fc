//! Session gate.
//!
//! Every request passes through [`session_gate`] before reaching a handler.
//! The gate resolves the caller from the encrypted `auth_token` cookie,
//! decides with [`decide`] whether the request may continue, and hands the
//! verified identity to handlers through request extensions. Identity is
//! never read from client-supplied headers.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use jw_db::{
    models::{Role, UserRecord},
    repositories::user,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::{cookies::AUTH_COOKIE, jwt};
use crate::{ApiState, error::ApiError};

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_LANDING_PATH: &str = "/admin/dashboard";
pub const USER_LANDING_PATH: &str = "/user/lessons";

/// Paths reachable without a session
const PUBLIC_PATHS: &[&str] = &[
    "/login",
    "/registration",
    "/health",
    "/api/login",
    "/api/registration",
    "/api/logout",
    "/api/jwt/verify-token",
];

const ADMIN_AREAS: &[&str] = &["/admin", "/api/admin"];
const USER_AREAS: &[&str] = &["/user", "/api/user"];

/// Headers that used to carry identity downstream; stripped so a client
/// cannot impersonate anyone by sending them.
const IDENTITY_HEADERS: &[&str] = &["x-user-id", "x-user-email", "x-user-name", "x-user-role"];

pub const TOKEN_NOT_FOUND: &str = "Token not found.";
pub const NO_TOKEN_PAYLOAD: &str = "No Payload in JWT Token.";
pub const NO_TOKEN_USER: &str = "No User corresponding to this JWT Token exists.";
pub const NOT_AUTHORIZED: &str = "You are not authorized to access this resource.";

/// Verified identity of the caller, available to every handler behind the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&UserRecord> for SessionUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionUser>()
            .cloned()
            .ok_or_else(|| ApiError::Auth("Not authenticated".to_string()))
    }
}

/// Outcome of the gate for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    RedirectTo(&'static str),
    Unauthorized,
}

/// Page a user lands on after signing in
pub const fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_LANDING_PATH,
        Role::Standard => USER_LANDING_PATH,
    }
}

/// `true` when `path` is `prefix` or lies below it. Matching is per path
/// segment, so `/administrator` is not under `/admin`.
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|public| is_under(path, public))
}

/// Decide what happens to a request for `path` made by a caller with `role`
/// (`None` for anonymous callers).
pub fn decide(path: &str, role: Option<Role>) -> GateDecision {
    if is_public(path) {
        return GateDecision::Continue;
    }

    let Some(role) = role else {
        return GateDecision::RedirectTo(LOGIN_PATH);
    };

    if path == "/" {
        return GateDecision::RedirectTo(landing_path(role));
    }

    if ADMIN_AREAS.iter().any(|area| is_under(path, area)) && role != Role::Admin {
        return GateDecision::Unauthorized;
    }

    if USER_AREAS.iter().any(|area| is_under(path, area)) && role != Role::Standard {
        return GateDecision::Unauthorized;
    }

    GateDecision::Continue
}

/// Resolve the user behind a session token.
///
/// The token must verify and its email must still belong to an account.
pub async fn verify_session(
    pool: &PgPool,
    jwt_secret: &str,
    token: &str,
) -> Result<UserRecord, ApiError> {
    if token.trim().is_empty() {
        return Err(ApiError::validation(TOKEN_NOT_FOUND));
    }

    let claims = jwt::verify_jwt_token(token, jwt_secret)
        .map_err(|_| ApiError::validation(NO_TOKEN_PAYLOAD))?;

    user::find_by_email(pool, &claims.email)
        .await?
        .ok_or_else(|| ApiError::validation(NO_TOKEN_USER))
}

fn strip_identity_headers(headers: &mut HeaderMap) {
    for name in IDENTITY_HEADERS {
        headers.remove(*name);
    }
}

pub async fn session_gate(
    State(state): State<ApiState>,
    mut request: Request,
    next: Next,
) -> Response {
    strip_identity_headers(request.headers_mut());

    let jar = PrivateCookieJar::from_headers(request.headers(), state.cookie_key.clone());
    let session = match jar.get(AUTH_COOKIE) {
        Some(cookie) => match verify_session(&state.pool, &state.jwt_secret, cookie.value()).await
        {
            Ok(user) => Some(SessionUser::from(&user)),
            // A store failure is not a signed-out user
            Err(e) if e.status_code().is_server_error() => return e.into_response(),
            Err(e) => {
                tracing::debug!(error = %e, "Session cookie rejected");
                None
            }
        },
        None => None,
    };

    let path = request.uri().path().to_owned();
    match decide(&path, session.as_ref().map(|user| user.role)) {
        GateDecision::Continue => {
            if let Some(user) = session {
                request.extensions_mut().insert(user);
            }
            next.run(request).await
        }
        GateDecision::RedirectTo(target) => {
            tracing::debug!(path = %path, target, "Redirecting");
            Redirect::temporary(target).into_response()
        }
        GateDecision::Unauthorized => {
            tracing::warn!(
                path = %path,
                user_id = ?session.as_ref().map(|user| user.user_id),
                "Role not allowed for path"
            );
            ApiError::Auth(NOT_AUTHORIZED.to_string()).into_response()
        }
    }
}
