use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a user of the portal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier for the user.
    pub id: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    #[serde(default)]
    pub last_name: String,
    /// The user's email address.
    pub email: String,
    /// The user's Argon2 password hash.
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    /// Whether the user administers the whole portal.
    #[serde(default)]
    pub is_admin: bool,
    /// Whether the user manages the system's users and organizations.
    #[serde(default)]
    pub is_system_manager: bool,
    /// Whether the user coordinates the course of their organization.
    #[serde(default)]
    pub is_course_coordinator: bool,
    /// Whether the user belongs to the academic register office.
    #[serde(default)]
    pub is_academic_register: bool,
    /// The organization (course) the user belongs to.
    #[serde(default)]
    pub organization_id: Option<Uuid>,
}

impl User {
    /// Whether the user belongs to the given organization.
    pub fn belongs_to(&self, organization_id: Uuid) -> bool {
        self.organization_id == Some(organization_id)
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}
