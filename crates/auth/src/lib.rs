//! `chapterflow-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from storage and transport. Every
//! check here answers with a bool: denial is a normal outcome, never an
//! error, and missing context required by a rule fails closed.

pub mod engine;
pub mod grants;
pub mod permissions;
pub mod roles;
pub mod scope;

pub use engine::{can, PermissionContext};
pub use grants::granted_permissions;
pub use permissions::Permission;
pub use roles::{assignable_roles, postable_scopes, AnnouncementScope};
