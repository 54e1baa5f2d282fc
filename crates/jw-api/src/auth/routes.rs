use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_extra::extract::PrivateCookieJar;
use jw_db::{models::UserProfile, repositories::user};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{
    cookies, jwt, password, registration,
    session::{self, SessionUser},
    validation,
};
use crate::{
    ApiState, error::ApiError, extract::JsonBody, metrics::record_auth_event,
    middleware::rate_limit,
};

pub fn routes() -> Router<ApiState> {
    use crate::make_rate_limit_layer;

    let login_routes = Router::new()
        .route("/api/login", post(login))
        .layer(make_rate_limit_layer!(
            rate_limit::LOGIN_RATE_PER_SECOND,
            rate_limit::LOGIN_BURST_SIZE
        ));

    let registration_routes = Router::new()
        .route("/api/registration", post(registration::register))
        .layer(make_rate_limit_layer!(
            rate_limit::REGISTRATION_RATE_PER_SECOND,
            rate_limit::REGISTRATION_BURST_SIZE
        ));

    let session_routes = Router::new()
        .route("/api/logout", post(logout))
        .route("/api/jwt/verify-token", post(verify_token))
        .route("/api/me", get(me));

    Router::new()
        .merge(login_routes)
        .merge(registration_routes)
        .merge(session_routes)
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct SessionResponse {
    message: &'static str,
    user: UserProfile,
}

async fn login(
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<(PrivateCookieJar, Json<SessionResponse>), ApiError> {
    let email = validation::normalize_email(&payload.email);
    if !validation::is_valid_email(&email) {
        return Err(ApiError::validation("Email Format is Invalid."));
    }
    validation::validate_password(&payload.password)?;

    let user = user::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| ApiError::not_found("No User with this email."))?;

    if !password::verify_password(payload.password, user.password_hash.clone()).await? {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        record_auth_event("login", false);
        return Err(ApiError::validation("Wrong Password."));
    }

    let token = jwt::generate_jwt_token(
        &SessionUser::from(&user),
        &state.jwt_secret,
        state.jwt_expiry_hours,
    )?;
    let jar = jar.add(cookies::create_auth_cookie(
        token,
        &state.environment,
        state.jwt_expiry_hours,
    ));

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
    record_auth_event("login", true);

    Ok((
        jar,
        Json(SessionResponse {
            message: "Login successful",
            user: user.into(),
        }),
    ))
}

async fn logout(jar: PrivateCookieJar) -> (PrivateCookieJar, Json<Value>) {
    let jar = jar.remove(cookies::removal_cookie());
    record_auth_event("logout", true);
    (jar, Json(json!({ "message": "Logged out" })))
}

#[derive(Debug, Deserialize)]
struct VerifyTokenRequest {
    token: Option<String>,
}

/// Check a token supplied in the body and return the account it belongs to
async fn verify_token(
    State(state): State<ApiState>,
    JsonBody(payload): JsonBody<VerifyTokenRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let token = payload.token.unwrap_or_default();
    let user = session::verify_session(&state.pool, &state.jwt_secret, &token).await?;

    Ok(Json(SessionResponse {
        message: "Token OK!",
        user: user.into(),
    }))
}

async fn me(
    session: SessionUser,
    State(state): State<ApiState>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = user::find_profile_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("No User with this ID exists."))?;

    Ok(Json(profile))
}
