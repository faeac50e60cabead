//! Static role → permission-set tables (the coarse gate).
//!
//! A permission absent from a role's table is denied outright; presence only
//! opens the door to the fine-grained rule, if the permission has one.

use chapterflow_members::Role;

use crate::permissions::Permission;

/// Everything except chapter creation/deletion, which stay above chapter rank.
const CHAPTER_ORGANISER_GRANTS: [Permission; 18] = [
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
    Permission::EditChapter,
    Permission::ManageInventory,
    Permission::CreateAnnouncement,
    Permission::ViewAnalytics,
    Permission::AwardBadge,
];

/// The static permission set for a role.
///
/// Regional organisers carry the full set coarsely — the fine-grained rules
/// are what keep them inside their country.
pub fn granted_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::GodMode | Role::GlobalAdmin | Role::RegionalOrganiser => &Permission::ALL,
        Role::ChapterOrganiser => &CHAPTER_ORGANISER_GRANTS,
        Role::ConfirmedActivist | Role::Activist | Role::Applicant => &[],
    }
}

pub(crate) fn is_granted(role: Role, permission: Permission) -> bool {
    granted_permissions(role).contains(&permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_hold_the_full_set() {
        for role in [Role::GodMode, Role::GlobalAdmin] {
            assert_eq!(granted_permissions(role).len(), Permission::ALL.len());
        }
    }

    #[test]
    fn chapter_organisers_cannot_touch_chapter_lifecycle() {
        let grants = granted_permissions(Role::ChapterOrganiser);
        assert!(!grants.contains(&Permission::CreateChapter));
        assert!(!grants.contains(&Permission::DeleteChapter));
        assert!(grants.contains(&Permission::EditChapter));
    }

    #[test]
    fn rank_and_file_hold_nothing() {
        for role in [Role::Applicant, Role::Activist, Role::ConfirmedActivist] {
            assert!(granted_permissions(role).is_empty());
        }
    }
}
