use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::organization::Organization;

/// In-memory organization store.
#[derive(Clone, Default)]
pub struct OrganizationRepository {
    organizations: Arc<RwLock<HashMap<Uuid, Organization>>>,
}

impl OrganizationRepository {
    pub fn from_organizations(organizations: Vec<Organization>) -> Self {
        let organizations = organizations.into_iter().map(|o| (o.id, o)).collect();
        Self {
            organizations: Arc::new(RwLock::new(organizations)),
        }
    }

    pub async fn find_by_id(&self, organization_id: Uuid) -> Option<Organization> {
        self.organizations.read().await.get(&organization_id).cloned()
    }

    pub async fn exists(&self, organization_id: Uuid) -> bool {
        self.organizations.read().await.contains_key(&organization_id)
    }

    /// Lists all organizations sorted by name.
    pub async fn list(&self) -> Vec<Organization> {
        let mut organizations: Vec<Organization> =
            self.organizations.read().await.values().cloned().collect();
        organizations.sort_by(|a, b| a.name.cmp(&b.name));
        organizations
    }
}
