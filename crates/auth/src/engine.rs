//! The authorization engine: (actor, permission, context) → allow/deny.
//!
//! - No IO
//! - No panics
//! - No side effects (pure policy check)
//!
//! Denial is a normal outcome the caller must check before acting; there is
//! no exception path. A rule that needs context the caller did not supply
//! denies — fail closed, never error.

use chapterflow_members::{Chapter, ChapterName, CubeEvent, OnboardingStatus, Role, User};

use crate::grants;
use crate::permissions::Permission;
use crate::scope;

/// Per-check context. Ephemeral: constructed per call, never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionContext<'a> {
    pub target_user: Option<&'a User>,
    pub event: Option<&'a CubeEvent>,
    pub chapter_name: Option<&'a ChapterName>,
    /// Needed by any rule that resolves country scope.
    pub all_chapters: Option<&'a [Chapter]>,
}

impl<'a> PermissionContext<'a> {
    pub fn for_target(target: &'a User, all_chapters: &'a [Chapter]) -> Self {
        Self {
            target_user: Some(target),
            all_chapters: Some(all_chapters),
            ..Self::default()
        }
    }

    pub fn for_event(event: &'a CubeEvent, all_chapters: &'a [Chapter]) -> Self {
        Self {
            event: Some(event),
            all_chapters: Some(all_chapters),
            ..Self::default()
        }
    }

    pub fn for_chapter(name: &'a ChapterName, all_chapters: &'a [Chapter]) -> Self {
        Self {
            chapter_name: Some(name),
            all_chapters: Some(all_chapters),
            ..Self::default()
        }
    }
}

/// May `actor` perform `permission` in `ctx`?
///
/// Two stages: the coarse role→permission-set gate, then the permission's
/// fine-grained rule. The match is exhaustive on purpose — a new permission
/// must state its rule (or explicitly stand on the coarse result) before the
/// crate compiles again.
pub fn can(actor: Option<&User>, permission: Permission, ctx: PermissionContext<'_>) -> bool {
    let Some(actor) = actor else {
        return false;
    };

    if actor.role == Role::GodMode {
        return true;
    }

    if !grants::is_granted(actor.role, permission) {
        return false;
    }

    match permission {
        // Hierarchy-guarded self-vs-target rules.
        Permission::EditUserRoles
        | Permission::EditUserChapters
        | Permission::DeleteUser
        | Permission::ViewOrganiserNotes
        | Permission::AddOrganiserNote => ctx
            .target_user
            .is_some_and(|target| scope::manages_member(actor, target, ctx.all_chapters)),

        // As above, plus: nobody decorates themselves.
        Permission::AwardBadge => ctx.target_user.is_some_and(|target| {
            target.id != actor.id && scope::manages_member(actor, target, ctx.all_chapters)
        }),

        // Status-guarded: no re-verification of confirmed members.
        Permission::VerifyUser => ctx.target_user.is_some_and(|target| {
            if target.onboarding_status == OnboardingStatus::Confirmed {
                return false;
            }
            if actor.role.at_least(Role::RegionalOrganiser) {
                return true;
            }
            actor.role == Role::ChapterOrganiser && scope::chapter_scope_covers(actor, target)
        }),

        // Entity-scoped operational rules.
        Permission::EditEvent
        | Permission::CancelEvent
        | Permission::LogEventReport
        | Permission::ManageEventParticipants => ctx
            .event
            .is_some_and(|event| scope::manages_event(actor, event, ctx.all_chapters)),

        Permission::EditChapter | Permission::ManageInventory => ctx
            .chapter_name
            .is_some_and(|name| scope::manages_chapter(actor, name, ctx.all_chapters)),

        Permission::DeleteChapter => {
            actor.role != Role::ChapterOrganiser
                && ctx
                    .chapter_name
                    .is_some_and(|name| scope::manages_chapter(actor, name, ctx.all_chapters))
        }

        // Coarse result stands: membership in the role's set already
        // authorized these.
        Permission::ViewMemberDirectory
        | Permission::ViewManagementDashboard
        | Permission::CreateEvent
        | Permission::CreateChapter
        | Permission::CreateAnnouncement
        | Permission::ViewAnalytics => true,
    }
}
