use crate::error::{AppError, Result};
use crate::models::tcc::{Tcc, TccStatus};
use crate::models::user::User;

use super::Capability;

/// Capability checks for one (possibly absent) user.
///
/// Every check is a pure function of the user and the target TCC. An absent
/// user is denied everything.
#[derive(Debug, Clone, Copy)]
pub struct Permissions<'a> {
    user: Option<&'a User>,
}

impl<'a> Permissions<'a> {
    pub fn for_user(user: Option<&'a User>) -> Self {
        Self { user }
    }

    fn check(&self, rule: impl FnOnce(&User) -> bool) -> bool {
        self.user.is_some_and(rule)
    }

    pub fn is_admin(&self) -> bool {
        self.check(|u| u.is_admin)
    }

    pub fn is_system_manager(&self) -> bool {
        self.check(|u| u.is_system_manager)
    }

    pub fn is_course_coordinator(&self) -> bool {
        self.check(|u| u.is_course_coordinator)
    }

    pub fn is_academic_register(&self) -> bool {
        self.check(|u| u.is_academic_register)
    }

    pub fn can_view_tcc(&self, tcc: &Tcc) -> bool {
        self.check(|u| {
            u.is_admin
                || u.is_system_manager
                || tcc.is_owned_by(&u.id)
                || (u.belongs_to(tcc.organization_id)
                    && (u.is_course_coordinator || u.is_academic_register))
        })
    }

    pub fn can_modify_tcc(&self, tcc: &Tcc) -> bool {
        self.check(|u| {
            u.is_admin
                || (tcc.is_owned_by(&u.id) && tcc.status == TccStatus::Draft)
                || (u.belongs_to(tcc.organization_id)
                    && u.is_course_coordinator
                    && tcc.status != TccStatus::Defended)
        })
    }

    pub fn can_delete_tcc(&self, tcc: &Tcc) -> bool {
        self.check(|u| {
            u.is_admin
                || u.is_system_manager
                || (tcc.is_owned_by(&u.id) && tcc.status == TccStatus::Draft)
        })
    }

    /// Drafts stay private to their owner and the admins.
    pub fn can_download_file(&self, tcc: &Tcc) -> bool {
        tcc.file_name.is_some()
            && self.check(|u| {
                u.is_admin
                    || tcc.is_owned_by(&u.id)
                    || (tcc.status != TccStatus::Draft && self.can_view_tcc(tcc))
            })
    }

    pub fn can_create_tcc(&self) -> bool {
        self.check(|u| u.is_admin || u.organization_id.is_some())
    }

    pub fn can_manage_users(&self) -> bool {
        self.check(|u| u.is_admin || u.is_system_manager)
    }

    pub fn can_manage_organization(&self) -> bool {
        self.check(|u| u.is_admin || u.is_system_manager || u.is_course_coordinator)
    }

    /// Evaluates a single capability request.
    pub fn allows(&self, capability: Capability<'_>) -> bool {
        match capability {
            Capability::ViewTcc(tcc) => self.can_view_tcc(tcc),
            Capability::ModifyTcc(tcc) => self.can_modify_tcc(tcc),
            Capability::DeleteTcc(tcc) => self.can_delete_tcc(tcc),
            Capability::DownloadFile(tcc) => self.can_download_file(tcc),
            Capability::CreateTcc => self.can_create_tcc(),
            Capability::ManageUsers => self.can_manage_users(),
            Capability::ManageOrganization => self.can_manage_organization(),
            Capability::Admin => self.is_admin(),
            Capability::SystemManager => self.is_system_manager(),
            Capability::CourseCoordinator => self.is_course_coordinator(),
            Capability::AcademicRegister => self.is_academic_register(),
        }
    }

    /// Like [`Permissions::allows`], failing with `Forbidden` on denial.
    pub fn require(&self, capability: Capability<'_>) -> Result<()> {
        if self.allows(capability) {
            return Ok(());
        }

        tracing::warn!(
            "❌ {} denied for user: {}",
            capability.name(),
            self.user.map(|u| u.id.as_str()).unwrap_or("<anonymous>")
        );
        Err(AppError::Forbidden)
    }
}
