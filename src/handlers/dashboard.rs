use axum::Json;
use serde::Serialize;

use crate::{
    error::Result,
    middleware_layer::current_user::CurrentUser,
    permissions::{Capability, PermissionGuard},
};

/// A link in the dashboard navigation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub greeting: String,
    pub user_id: String,
    pub roles: Vec<&'static str>,
    pub navigation: Vec<NavItem>,
    pub expires_at: Option<String>,
}

/// The dashboard home: a greeting and the sections the user may open.
pub async fn dashboard(current: CurrentUser) -> Result<Json<DashboardResponse>> {
    let user = current.require()?;
    let permissions = current.permissions();

    let guarded = [
        (Capability::CreateTcc, NavItem::new("Novo TCC", "/dashboard/tccs#new")),
        (Capability::ManageUsers, NavItem::new("Usuários", "/dashboard/users")),
        (
            Capability::ManageOrganization,
            NavItem::new("Gerenciar organizações", "/dashboard/organizations#manage"),
        ),
    ];

    let mut navigation = vec![
        NavItem::new("TCCs", "/dashboard/tccs"),
        NavItem::new("Organizações", "/dashboard/organizations"),
    ];
    navigation.extend(
        guarded
            .into_iter()
            .filter_map(|(capability, item)| PermissionGuard::new(capability, item).render(&permissions)),
    );

    let roles = [
        (Capability::Admin, "admin"),
        (Capability::SystemManager, "system_manager"),
        (Capability::CourseCoordinator, "course_coordinator"),
        (Capability::AcademicRegister, "academic_register"),
    ]
    .into_iter()
    .filter_map(|(capability, role)| PermissionGuard::new(capability, role).render(&permissions))
    .collect();

    Ok(Json(DashboardResponse {
        greeting: format!("Olá, {}", user.first_name),
        user_id: user.id.clone(),
        roles,
        navigation,
        expires_at: current.session.as_ref().map(|s| s.expires_at.to_rfc3339()),
    }))
}
