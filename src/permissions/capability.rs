use crate::models::tcc::Tcc;

/// A single permission request. Resource-scoped capabilities carry the TCC
/// they are evaluated against.
#[derive(Debug, Clone, Copy)]
pub enum Capability<'a> {
    ViewTcc(&'a Tcc),
    ModifyTcc(&'a Tcc),
    DeleteTcc(&'a Tcc),
    DownloadFile(&'a Tcc),
    CreateTcc,
    ManageUsers,
    ManageOrganization,
    Admin,
    SystemManager,
    CourseCoordinator,
    AcademicRegister,
}

impl Capability<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::ViewTcc(_) => "canViewTCC",
            Capability::ModifyTcc(_) => "canModifyTCC",
            Capability::DeleteTcc(_) => "canDeleteTCC",
            Capability::DownloadFile(_) => "canDownloadFile",
            Capability::CreateTcc => "canCreateTCC",
            Capability::ManageUsers => "canManageUsers",
            Capability::ManageOrganization => "canManageOrganization",
            Capability::Admin => "isAdmin",
            Capability::SystemManager => "isSystemManager",
            Capability::CourseCoordinator => "isCourseCoordinator",
            Capability::AcademicRegister => "isAcademicRegister",
        }
    }
}
