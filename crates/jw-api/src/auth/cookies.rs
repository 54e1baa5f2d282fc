use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::Environment;

/// Name of the encrypted cookie carrying the session token
pub const AUTH_COOKIE: &str = "auth_token";

/// Create the session cookie holding the JWT.
///
/// The cookie is HttpOnly and lives as long as the token. It is only
/// marked Secure outside development so local HTTP setups keep working.
pub fn create_auth_cookie(
    token: String,
    environment: &Environment,
    expiry_hours: i64,
) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .max_age(time::Duration::hours(expiry_hours))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(!environment.is_development())
        .build()
}

/// Cookie matching the session cookie, used to remove it on logout
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, "")).path("/").build()
}
