use garde::Validate;

use crate::error::{AppError, Result};

/// Validates a request payload with its `garde` rules.
///
/// # Arguments
///
/// * `payload` - The payload to validate.
///
/// # Returns
///
/// A `Result<()>` carrying every failed rule in the error message.
pub fn validate_payload<T>(payload: &T) -> Result<()>
where
    T: Validate,
    T::Context: Default,
{
    payload
        .validate()
        .map_err(|report| AppError::Validation(report.to_string().trim().to_string()))
}

/// Validates a password.
///
/// # Arguments
///
/// * `password` - The password to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the password is valid.
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if password.len() > 128 {
        return Err(AppError::Validation(
            "Password must be at most 128 characters".to_string(),
        ));
    }

    Ok(())
}
