use crate::error::{AppError, Result};

/// Validates a TCC title.
pub fn validate_title(title: &str) -> Result<()> {
    let title = title.trim();

    if title.is_empty() || title.chars().count() > 300 {
        return Err(AppError::Validation(
            "Title must be between 1 and 300 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates the name of an uploaded document. Only plain PDF file names
/// inside the files directory are accepted.
pub fn validate_file_name(file_name: &str) -> Result<()> {
    let plain = !file_name.is_empty()
        && !file_name.starts_with('.')
        && file_name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if !plain || !file_name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "File name must be a plain .pdf file name".to_string(),
        ));
    }

    Ok(())
}
