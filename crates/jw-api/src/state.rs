use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::PgPool;

use crate::{ApiConfig, config::Environment, image_host::ImageHost};

#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub cookie_key: Key,
    pub environment: Environment,
    pub image_host: ImageHost,
    pub bcrypt_cost: u32,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        // `ApiConfig` guarantees the secret is long enough for a private key
        let cookie_key = Key::from(config.cookie_secret.as_bytes());

        let image_host = ImageHost::new(
            config.imgbb_upload_url.clone(),
            config.imgbb_api_key.clone(),
        );

        Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiry_hours: config.jwt_expiry_hours,
            cookie_key,
            environment: config.env.clone(),
            image_host,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

impl FromRef<ApiState> for Key {
    fn from_ref(state: &ApiState) -> Self {
        state.cookie_key.clone()
    }
}
