use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::user::User;

/// In-memory user directory keyed by user ID.
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserRepository {
    pub fn from_users(users: Vec<User>) -> Self {
        let users = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Finds a user by ID.
    pub async fn find_by_id(&self, user_id: &str) -> Option<User> {
        self.users.read().await.get(user_id).cloned()
    }

    /// Finds a user by email, ignoring case.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Inserts a new user. Emails are unique.
    pub async fn insert(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        users.insert(user.id.clone(), user.clone());
        tracing::debug!("User stored: {}", user.id);
        Ok(user)
    }

    /// Lists all users sorted by name.
    pub async fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.full_name().cmp(&b.full_name()));
        users
    }
}
