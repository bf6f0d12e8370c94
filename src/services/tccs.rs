use std::path::Path;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::tcc::{Tcc, TccStatus};
use crate::models::user::User;
use crate::permissions::{Capability, Permissions};
use crate::repositories::directory::Directory;
use crate::validation::tcc::{validate_file_name, validate_title};

/// Changes requested on an existing TCC.
#[derive(Debug, Default)]
pub struct TccChanges {
    pub title: Option<String>,
    pub status: Option<TccStatus>,
    /// Attaches the document stored under the TCC's own file name.
    pub attach_document: bool,
}

/// Loads a TCC the user may view.
///
/// Missing TCCs are `NotFound`; hidden ones are `Forbidden`.
pub async fn find_visible(directory: &Directory, permissions: &Permissions<'_>, tcc_id: Uuid) -> Result<Tcc> {
    let tcc = directory.tccs.find_by_id(tcc_id).await.ok_or(AppError::NotFound)?;
    permissions.require(Capability::ViewTcc(&tcc))?;
    Ok(tcc)
}

/// Lists the TCCs the user may view, optionally within one organization.
pub async fn list_visible(
    directory: &Directory,
    permissions: &Permissions<'_>,
    organization_id: Option<Uuid>,
) -> Vec<Tcc> {
    let tccs = match organization_id {
        Some(id) => directory.tccs.list_by_organization(id).await,
        None => directory.tccs.list().await,
    };

    tccs.into_iter()
        .filter(|tcc| permissions.can_view_tcc(tcc))
        .collect()
}

/// Creates a draft TCC owned by `owner` in their organization.
///
/// Admins without an organization must name one.
pub async fn create_tcc(
    directory: &Directory,
    owner: &User,
    title: String,
    organization_id: Option<Uuid>,
) -> Result<Tcc> {
    Permissions::for_user(Some(owner)).require(Capability::CreateTcc)?;
    validate_title(&title)?;

    let organization_id = match (owner.is_admin, organization_id, owner.organization_id) {
        (true, Some(requested), _) => requested,
        (_, _, Some(own)) => own,
        _ => {
            return Err(AppError::Validation(
                "An organization is required".to_string(),
            ))
        }
    };

    if !directory.organizations.exists(organization_id).await {
        return Err(AppError::Validation("Unknown organization".to_string()));
    }

    let now = Utc::now();
    let tcc = Tcc {
        id: Uuid::new_v4(),
        title: title.trim().to_string(),
        owner_id: owner.id.clone(),
        organization_id,
        status: TccStatus::Draft,
        file_name: None,
        created_at: now,
        updated_at: now,
    };

    let tcc = directory.tccs.insert(tcc).await;
    tracing::info!("✅ TCC created: {} by {}", tcc.id, owner.id);
    Ok(tcc)
}

/// Applies changes to a TCC the user may modify.
pub async fn update_tcc(
    directory: &Directory,
    permissions: &Permissions<'_>,
    tcc_id: Uuid,
    changes: TccChanges,
) -> Result<Tcc> {
    let mut tcc = find_visible(directory, permissions, tcc_id).await?;
    permissions.require(Capability::ModifyTcc(&tcc))?;

    if let Some(title) = changes.title {
        validate_title(&title)?;
        tcc.title = title.trim().to_string();
    }

    if changes.attach_document {
        tcc.file_name = Some(tcc.document_name());
    }

    if let Some(status) = changes.status {
        if !tcc.status.can_advance_to(status) {
            return Err(AppError::Validation(format!(
                "Cannot move a {:?} TCC to {:?}",
                tcc.status, status
            )));
        }
        tcc.status = status;
    }

    tcc.updated_at = Utc::now();
    let tcc = directory.tccs.update(tcc).await?;
    tracing::info!("✅ TCC updated: {}", tcc.id);
    Ok(tcc)
}

/// Deletes a TCC the user may delete.
pub async fn delete_tcc(directory: &Directory, permissions: &Permissions<'_>, tcc_id: Uuid) -> Result<()> {
    let tcc = find_visible(directory, permissions, tcc_id).await?;
    permissions.require(Capability::DeleteTcc(&tcc))?;

    directory.tccs.delete(tcc.id).await?;
    tracing::info!("🗑️ TCC deleted: {}", tcc.id);
    Ok(())
}

/// Reads the PDF attached to a TCC the user may download.
pub async fn read_document(
    directory: &Directory,
    permissions: &Permissions<'_>,
    files_dir: &Path,
    tcc_id: Uuid,
) -> Result<(Tcc, Vec<u8>)> {
    let tcc = find_visible(directory, permissions, tcc_id).await?;
    permissions.require(Capability::DownloadFile(&tcc))?;

    let file_name = tcc.file_name.as_deref().ok_or(AppError::NotFound)?;
    validate_file_name(file_name)?;

    let bytes = match tokio::fs::read(files_dir.join(file_name)).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("❌ Document missing on disk for TCC {}: {}", tcc.id, file_name);
            return Err(AppError::NotFound);
        }
        Err(e) => return Err(e.into()),
    };

    match infer::get(&bytes) {
        Some(kind) if kind.mime_type() == "application/pdf" => {}
        _ => {
            tracing::error!("❌ Document for TCC {} is not a PDF", tcc.id);
            return Err(AppError::Internal("Stored document is not a PDF".to_string()));
        }
    }

    Ok((tcc, bytes))
}
