use crate::{
    error::ApiError,
    validation::{MAX_TEXT_LENGTH, max_chars},
};
use validator::ValidateEmail;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Lower-cased, trimmed email used for storage and lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.validate_email()
}

/// Validate a registration email
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if !is_valid_email(email) {
        return Err(ApiError::validation("Email is Invalid."));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(
            "Password must be at least 6 characters long.",
        ));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(ApiError::validation(
            "Password must be at most 128 characters long.",
        ));
    }

    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Name is invalid."));
    }
    if !max_chars(name, MAX_TEXT_LENGTH) {
        return Err(ApiError::validation(
            "Name must be at most 255 characters long.",
        ));
    }
    Ok(())
}
