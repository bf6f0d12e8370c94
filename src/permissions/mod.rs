//! Role and capability checks.
//!
//! [`Permissions`] answers capability questions for an explicitly supplied
//! user; [`PermissionGuard`] gates a view fragment on exactly one
//! [`Capability`].

mod capability;
mod evaluator;
mod guard;

pub use capability::Capability;
pub use evaluator::Permissions;
pub use guard::{GuardError, GuardProps, PermissionGuard};
