use thiserror::Error;

use crate::models::tcc::Tcc;

use super::{Capability, Permissions};

/// Why a set of guard props does not name exactly one capability.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GuardError {
    #[error("no capability requested")]
    NoCapability,

    #[error("multiple capabilities requested: {0:?}")]
    MultipleCapabilities(Vec<&'static str>),

    #[error("{0} requires a tcc")]
    MissingResource(&'static str),
}

/// Flag-style guard props, one flag per capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct GuardProps<'a> {
    pub tcc: Option<&'a Tcc>,
    pub require_view_tcc: bool,
    pub require_modify_tcc: bool,
    pub require_delete_tcc: bool,
    pub require_download_file: bool,
    pub require_create_tcc: bool,
    pub require_manage_users: bool,
    pub require_manage_organization: bool,
    pub require_admin: bool,
    pub require_system_manager: bool,
    pub require_course_coordinator: bool,
    pub require_academic_register: bool,
}

impl<'a> TryFrom<GuardProps<'a>> for Capability<'a> {
    type Error = GuardError;

    fn try_from(props: GuardProps<'a>) -> Result<Self, Self::Error> {
        let scoped = |name: &'static str, build: fn(&'a Tcc) -> Capability<'a>| {
            props.tcc.map(build).ok_or(GuardError::MissingResource(name))
        };

        let requested: Vec<(&'static str, bool)> = vec![
            ("requireViewTCC", props.require_view_tcc),
            ("requireModifyTCC", props.require_modify_tcc),
            ("requireDeleteTCC", props.require_delete_tcc),
            ("requireDownloadFile", props.require_download_file),
            ("requireCreateTCC", props.require_create_tcc),
            ("requireManageUsers", props.require_manage_users),
            ("requireManageOrganization", props.require_manage_organization),
            ("requireAdmin", props.require_admin),
            ("requireSystemManager", props.require_system_manager),
            ("requireCourseCoordinator", props.require_course_coordinator),
            ("requireAcademicRegister", props.require_academic_register),
        ];

        let set: Vec<&'static str> = requested
            .into_iter()
            .filter_map(|(name, on)| on.then_some(name))
            .collect();

        match set.as_slice() {
            [] => Err(GuardError::NoCapability),
            ["requireViewTCC"] => scoped("requireViewTCC", Capability::ViewTcc),
            ["requireModifyTCC"] => scoped("requireModifyTCC", Capability::ModifyTcc),
            ["requireDeleteTCC"] => scoped("requireDeleteTCC", Capability::DeleteTcc),
            ["requireDownloadFile"] => scoped("requireDownloadFile", Capability::DownloadFile),
            ["requireCreateTCC"] => Ok(Capability::CreateTcc),
            ["requireManageUsers"] => Ok(Capability::ManageUsers),
            ["requireManageOrganization"] => Ok(Capability::ManageOrganization),
            ["requireAdmin"] => Ok(Capability::Admin),
            ["requireSystemManager"] => Ok(Capability::SystemManager),
            ["requireCourseCoordinator"] => Ok(Capability::CourseCoordinator),
            ["requireAcademicRegister"] => Ok(Capability::AcademicRegister),
            _ => Err(GuardError::MultipleCapabilities(set.to_vec())),
        }
    }
}

/// Renders `children` when the capability is granted, `fallback` otherwise.
#[derive(Debug)]
pub struct PermissionGuard<'a, T> {
    capability: Capability<'a>,
    children: T,
    fallback: Option<T>,
}

impl<'a, T> PermissionGuard<'a, T> {
    pub fn new(capability: Capability<'a>, children: T) -> Self {
        Self {
            capability,
            children,
            fallback: None,
        }
    }

    /// Builds a guard from flag props, rejecting ambiguous requests.
    pub fn from_props(props: GuardProps<'a>, children: T) -> Result<Self, GuardError> {
        Ok(Self::new(Capability::try_from(props)?, children))
    }

    pub fn with_fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// `None` means nothing is rendered.
    pub fn render(self, permissions: &Permissions<'_>) -> Option<T> {
        if permissions.allows(self.capability) {
            Some(self.children)
        } else {
            self.fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tcc::TccStatus;
    use crate::models::user::User;
    use chrono::Utc;
    use uuid::Uuid;

    fn student(organization_id: Option<Uuid>) -> User {
        User {
            id: "student".to_string(),
            first_name: "Bruno".to_string(),
            last_name: "Lima".to_string(),
            email: "bruno@example.com".to_string(),
            password_hash: String::new(),
            is_admin: false,
            is_system_manager: false,
            is_course_coordinator: false,
            is_academic_register: false,
            organization_id,
        }
    }

    fn foreign_tcc() -> Tcc {
        Tcc {
            id: Uuid::new_v4(),
            title: "Redes definidas por software".to_string(),
            owner_id: "someone-else".to_string(),
            organization_id: Uuid::new_v4(),
            status: TccStatus::Draft,
            file_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn non_admin_outside_organization_gets_fallback_for_modify() {
        let user = student(Some(Uuid::new_v4()));
        let tcc = foreign_tcc();
        let props = GuardProps {
            tcc: Some(&tcc),
            require_modify_tcc: true,
            ..Default::default()
        };

        let rendered = PermissionGuard::from_props(props, "edit-button")
            .unwrap()
            .with_fallback("read-only")
            .render(&Permissions::for_user(Some(&user)));

        assert_eq!(rendered, Some("read-only"));
    }

    #[test]
    fn granted_capability_renders_children() {
        let mut user = student(None);
        user.is_admin = true;

        let rendered = PermissionGuard::new(Capability::ManageUsers, "users-link")
            .render(&Permissions::for_user(Some(&user)));

        assert_eq!(rendered, Some("users-link"));
    }

    #[test]
    fn default_fallback_renders_nothing() {
        let rendered = PermissionGuard::new(Capability::Admin, "admin-panel")
            .render(&Permissions::for_user(None));

        assert_eq!(rendered, None);
    }

    #[test]
    fn props_without_flags_are_rejected() {
        let result = Capability::try_from(GuardProps::default());
        assert_eq!(result.unwrap_err(), GuardError::NoCapability);
    }

    #[test]
    fn props_with_several_flags_are_rejected() {
        let props = GuardProps {
            require_admin: true,
            require_manage_users: true,
            ..Default::default()
        };

        assert_eq!(
            Capability::try_from(props).unwrap_err(),
            GuardError::MultipleCapabilities(vec!["requireManageUsers", "requireAdmin"])
        );
    }

    #[test]
    fn scoped_flag_without_tcc_is_rejected() {
        let props = GuardProps {
            require_download_file: true,
            ..Default::default()
        };

        assert_eq!(
            Capability::try_from(props).unwrap_err(),
            GuardError::MissingResource("requireDownloadFile")
        );
    }

    #[test]
    fn single_flag_maps_to_its_capability() {
        let tcc = foreign_tcc();
        let props = GuardProps {
            tcc: Some(&tcc),
            require_view_tcc: true,
            ..Default::default()
        };

        let capability = Capability::try_from(props).unwrap();
        assert_eq!(capability.name(), "canViewTCC");
    }
}
