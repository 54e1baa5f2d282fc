//! Account registration from a multipart form with a profile photo.

use axum::{
    Json,
    extract::{Multipart, State},
};
use jw_db::{models::Role, repositories::user};
use serde_json::{Value, json};

use super::{password, validation};
use crate::{
    ApiState,
    error::ApiError,
    image_host::ImageUpload,
    metrics::record_auth_event,
};

/// Raw form fields as received; any of them may be missing
#[derive(Debug, Default)]
pub(crate) struct RegistrationForm {
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) photo: Option<ImageUpload>,
}

/// A registration that passed every field check
#[derive(Debug)]
pub(crate) struct NewAccount {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) photo: ImageUpload,
}

impl RegistrationForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "name" => form.name = Some(field.text().await?),
                "email" => form.email = Some(field.text().await?),
                "password" => form.password = Some(field.text().await?),
                "photo" => {
                    let file_name = field.file_name().unwrap_or("photo").to_owned();
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    // Browsers send an empty part when no file was chosen
                    if !bytes.is_empty() {
                        form.photo = Some(ImageUpload {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                other => tracing::debug!(field = other, "Ignoring unknown registration field"),
            }
        }

        Ok(form)
    }

    /// Check the fields in the order the form shows them and report the
    /// first problem.
    pub(crate) fn validate(self) -> Result<NewAccount, ApiError> {
        let name = self.name.unwrap_or_default();
        validation::validate_name(&name)?;

        let email = validation::normalize_email(&self.email.unwrap_or_default());
        validation::validate_email(&email)?;

        let password = self.password.unwrap_or_default();
        validation::validate_password(&password)?;

        let photo = self
            .photo
            .ok_or_else(|| ApiError::validation("Upload a Photo."))?;

        Ok(NewAccount {
            name: name.trim().to_string(),
            email,
            password,
            photo,
        })
    }
}

pub(crate) async fn register(
    State(state): State<ApiState>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let account = RegistrationForm::read(multipart).await?.validate()?;

    if user::email_exists(&state.pool, &account.email).await? {
        record_auth_event("registration", false);
        return Err(ApiError::conflict("A user with this email already exists."));
    }

    let photo_url = state.image_host.upload(account.photo).await?;
    let password_hash = password::hash_password(account.password, state.bcrypt_cost).await?;

    let user_id = user::create_user(
        &state.pool,
        &account.name,
        &account.email,
        &password_hash,
        &photo_url,
        Role::Standard,
    )
    .await?;

    tracing::info!(user_id = %user_id, "User registered");
    record_auth_event("registration", true);

    Ok(Json(json!({ "message": "Registration successful!" })))
}
