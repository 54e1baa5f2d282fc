use serde::Deserialize;
use thiserror::Error;

/// Minimum length of `COOKIE_SECRET`; the private cookie key needs 64 bytes
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

/// Minimum length of `JWT_SECRET`
pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration, read from environment variables.
///
/// Field names map to upper-case variables (`database_url` is read from
/// `DATABASE_URL`, `env` from `ENV`, and so on).
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub cookie_secret: String,
    pub imgbb_api_key: String,
    #[serde(default = "default_imgbb_upload_url")]
    pub imgbb_upload_url: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_jwt_expiry_hours")]
    pub jwt_expiry_hours: i64,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Comma separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    #[serde(default = "default_server_addr")]
    pub server_addr: String,
    #[serde(default = "default_max_db_connections")]
    pub max_db_connections: u32,
}

fn default_imgbb_upload_url() -> String {
    "https://api.imgbb.com/1/upload".to_string()
}

const fn default_jwt_expiry_hours() -> i64 {
    1
}

const fn default_bcrypt_cost() -> u32 {
    10
}

fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

fn default_server_addr() -> String {
    "0.0.0.0:3000".to_string()
}

const fn default_max_db_connections() -> u32 {
    10
}

impl ApiConfig {
    /// Load and validate the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the configuration from explicit key/value pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(pairs)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_secret.len() < MIN_COOKIE_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "COOKIE_SECRET must be at least {MIN_COOKIE_SECRET_LEN} bytes long"
            )));
        }

        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} bytes long"
            )));
        }

        if self.jwt_expiry_hours <= 0 {
            return Err(ConfigError::Invalid(
                "JWT_EXPIRY_HOURS must be positive".to_string(),
            ));
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid(
                "BCRYPT_COST must be between 4 and 31".to_string(),
            ));
        }

        Ok(())
    }

    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }
}
