use uuid::Uuid;

use crate::crypto::password::{hash_password, verify_password};
use crate::error::{AppError, Result};
use crate::models::user::User;
use crate::repositories::directory::Directory;

/// The data needed to register a new user.
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub organization_id: Option<Uuid>,
}

/// Creates a new user without any role.
///
/// # Arguments
///
/// * `directory` - The user and organization store.
/// * `new_user` - The registration data.
///
/// # Returns
///
/// A `Result` containing the created `User`.
pub async fn create_user(directory: &Directory, new_user: NewUser) -> Result<User> {
    tracing::debug!("🔐 Creating user: {}", new_user.email);

    if let Some(organization_id) = new_user.organization_id {
        if !directory.organizations.exists(organization_id).await {
            return Err(AppError::Validation("Unknown organization".to_string()));
        }
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        first_name: new_user.first_name.trim().to_string(),
        last_name: new_user.last_name.trim().to_string(),
        email: new_user.email.trim().to_lowercase(),
        password_hash: hash_password(&new_user.password)?,
        is_admin: false,
        is_system_manager: false,
        is_course_coordinator: false,
        is_academic_register: false,
        organization_id: new_user.organization_id,
    };

    let user = directory.users.insert(user).await?;
    tracing::info!("✅ User created with ID: {}", user.id);
    Ok(user)
}

/// Authenticates a user by email and password.
///
/// Unknown emails and wrong passwords fail with the same message.
pub async fn authenticate_user(directory: &Directory, email: &str, password: &str) -> Result<User> {
    tracing::debug!("🔐 Authenticating user: {}", email);

    let user = directory
        .users
        .find_by_email(email.trim())
        .await
        .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

    if !verify_password(password, &user.password_hash) {
        return Err(AppError::Authentication(
            "Invalid email or password".to_string(),
        ));
    }

    tracing::info!("✅ User authenticated: {}", user.id);
    Ok(user)
}
