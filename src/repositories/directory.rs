use std::path::Path;
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{organization::Organization, tcc::Tcc, user::User};
use crate::repositories::{
    organization::OrganizationRepository,
    tcc::TccRepository,
    user::UserRepository,
};

/// The initial contents of the directory, as stored in `DATA_FILE`.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub tccs: Vec<Tcc>,
}

/// Users, organizations and TCCs known to the portal.
#[derive(Clone, Default)]
pub struct Directory {
    pub users: UserRepository,
    pub organizations: OrganizationRepository,
    pub tccs: TccRepository,
}

impl Directory {
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            users: UserRepository::from_users(seed.users),
            organizations: OrganizationRepository::from_organizations(seed.organizations),
            tccs: TccRepository::from_tccs(seed.tccs),
        }
    }

    /// Loads the directory from a JSON seed file.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read DATA_FILE {}", path.display()))?;

        let seed: Seed = sonic_rs::from_str(&raw)
            .with_context(|| format!("DATA_FILE {} is not valid seed JSON", path.display()))?;

        tracing::info!(
            "✅ Directory seeded: {} users, {} organizations, {} TCCs",
            seed.users.len(),
            seed.organizations.len(),
            seed.tccs.len()
        );

        Ok(Self::from_seed(seed))
    }
}
