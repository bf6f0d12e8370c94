use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    handlers::tccs::TccView,
    middleware_layer::current_user::CurrentUser,
    models::organization::Organization,
    permissions::{Capability, PermissionGuard, Permissions},
    services::tccs as tcc_service,
    state::AppState,
};

/// An organization with the TCCs the user may browse in it.
#[derive(Serialize)]
pub struct OrganizationView {
    #[serde(flatten)]
    pub organization: Organization,
    pub can_manage: bool,
    pub tccs: Vec<TccView>,
}

/// Whether the user sees every organization or only their own.
fn sees_all(permissions: &Permissions<'_>) -> bool {
    permissions.is_admin() || permissions.is_system_manager()
}

/// Lists the organizations the current user may browse.
pub async fn list_organizations(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<Organization>>> {
    let user = current.require()?;
    let permissions = current.permissions();

    let organizations = state.directory.organizations.list().await;
    if sees_all(&permissions) {
        return Ok(Json(organizations));
    }

    let own = organizations
        .into_iter()
        .filter(|o| user.belongs_to(o.id))
        .collect();
    Ok(Json(own))
}

/// Shows one organization and its visible TCCs.
pub async fn get_organization(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(organization_id): Path<Uuid>,
) -> Result<Json<OrganizationView>> {
    let user = current.require()?;
    let permissions = current.permissions();

    let organization = state
        .directory
        .organizations
        .find_by_id(organization_id)
        .await
        .ok_or(AppError::NotFound)?;

    if !sees_all(&permissions) && !user.belongs_to(organization.id) {
        tracing::warn!("❌ User {} browsed foreign organization {}", user.id, organization.id);
        return Err(AppError::Forbidden);
    }

    let can_manage = PermissionGuard::new(Capability::ManageOrganization, true)
        .render(&permissions)
        .unwrap_or_default();

    let tccs = tcc_service::list_visible(&state.directory, &permissions, Some(organization.id))
        .await
        .into_iter()
        .map(|tcc| TccView::new(tcc, &permissions))
        .collect();

    Ok(Json(OrganizationView {
        organization,
        can_manage,
        tccs,
    }))
}
