use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lifecycle status of a TCC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TccStatus {
    Draft,
    Submitted,
    Defended,
}

impl TccStatus {
    /// Statuses only move forward: draft, submitted, defended.
    pub fn can_advance_to(self, next: TccStatus) -> bool {
        matches!(
            (self, next),
            (TccStatus::Draft, TccStatus::Submitted) | (TccStatus::Submitted, TccStatus::Defended)
        ) || self == next
    }
}

/// Represents a thesis (TCC) in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tcc {
    /// The unique identifier for the TCC.
    pub id: Uuid,
    /// The title of the TCC.
    pub title: String,
    /// The ID of the user who authors the TCC.
    pub owner_id: String,
    /// The organization (course) the TCC belongs to.
    pub organization_id: Uuid,
    pub status: TccStatus,
    /// The PDF document under the files directory, if uploaded.
    #[serde(default)]
    pub file_name: Option<String>,
    /// The timestamp when the TCC was created.
    pub created_at: DateTime<Utc>,
    /// The timestamp when the TCC was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Tcc {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    /// The file a newly attached document is stored under.
    pub fn document_name(&self) -> String {
        format!("{}.pdf", self.id)
    }
}
