use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::tcc::Tcc;

/// In-memory TCC store.
#[derive(Clone, Default)]
pub struct TccRepository {
    tccs: Arc<RwLock<HashMap<Uuid, Tcc>>>,
}

impl TccRepository {
    pub fn from_tccs(tccs: Vec<Tcc>) -> Self {
        let tccs = tccs.into_iter().map(|t| (t.id, t)).collect();
        Self {
            tccs: Arc::new(RwLock::new(tccs)),
        }
    }

    pub async fn find_by_id(&self, tcc_id: Uuid) -> Option<Tcc> {
        self.tccs.read().await.get(&tcc_id).cloned()
    }

    /// Lists TCCs, newest first.
    pub async fn list(&self) -> Vec<Tcc> {
        let mut tccs: Vec<Tcc> = self.tccs.read().await.values().cloned().collect();
        tccs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tccs
    }

    /// Lists the TCCs of one organization, newest first.
    pub async fn list_by_organization(&self, organization_id: Uuid) -> Vec<Tcc> {
        let mut tccs: Vec<Tcc> = self
            .tccs
            .read()
            .await
            .values()
            .filter(|t| t.organization_id == organization_id)
            .cloned()
            .collect();
        tccs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tccs
    }

    pub async fn insert(&self, tcc: Tcc) -> Tcc {
        self.tccs.write().await.insert(tcc.id, tcc.clone());
        tracing::debug!("TCC stored: {}", tcc.id);
        tcc
    }

    /// Replaces a stored TCC.
    pub async fn update(&self, tcc: Tcc) -> Result<Tcc> {
        let mut tccs = self.tccs.write().await;
        let slot = tccs.get_mut(&tcc.id).ok_or(AppError::NotFound)?;
        *slot = tcc.clone();
        Ok(tcc)
    }

    pub async fn delete(&self, tcc_id: Uuid) -> Result<()> {
        self.tccs
            .write()
            .await
            .remove(&tcc_id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}
