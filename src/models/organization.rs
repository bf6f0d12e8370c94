use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an organization (an institution or one of its courses).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// The unique identifier for the organization.
    pub id: Uuid,
    /// The name of the organization.
    pub name: String,
    /// The parent organization, if any.
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}
