//! The closed set of privileged actions.

use serde::{Deserialize, Serialize};

/// A privileged action.
///
/// Every permission has exactly one static role-set mapping (see
/// [`crate::grants`]) and at most one fine-grained context rule (see
/// [`crate::engine::can`]). Adding a variant forces the engine's match to be
/// extended — there is no fall-through default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewMemberDirectory,
    ViewManagementDashboard,
    EditUserRoles,
    EditUserChapters,
    DeleteUser,
    VerifyUser,
    ViewOrganiserNotes,
    AddOrganiserNote,

    CreateEvent,
    EditEvent,
    CancelEvent,
    LogEventReport,
    ManageEventParticipants,

    CreateChapter,
    EditChapter,
    DeleteChapter,
    ManageInventory,

    CreateAnnouncement,
    ViewAnalytics,
    AwardBadge,
}

impl Permission {
    /// Every permission. Order matches declaration.
    pub const ALL: [Permission; 20] = [
        Permission::ViewMemberDirectory,
        Permission::ViewManagementDashboard,
        Permission::EditUserRoles,
        Permission::EditUserChapters,
        Permission::DeleteUser,
        Permission::VerifyUser,
        Permission::ViewOrganiserNotes,
        Permission::AddOrganiserNote,
        Permission::CreateEvent,
        Permission::EditEvent,
        Permission::CancelEvent,
        Permission::LogEventReport,
        Permission::ManageEventParticipants,
        Permission::CreateChapter,
        Permission::EditChapter,
        Permission::DeleteChapter,
        Permission::ManageInventory,
        Permission::CreateAnnouncement,
        Permission::ViewAnalytics,
        Permission::AwardBadge,
    ];
}
