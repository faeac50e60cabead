//! Role assignment and announcement audiences.

use serde::{Deserialize, Serialize};

use chapterflow_members::{Role, User};

/// Roles `actor` may grant to somebody else.
///
/// Escalation is prevented by construction: below GodMode, nobody can grant a
/// role equal to or above their own, and GodMode itself is only ever assigned
/// by GodMode.
pub fn assignable_roles(actor: &User) -> Vec<Role> {
    if actor.role == Role::GodMode {
        return Role::ALL.to_vec();
    }

    if actor.role.at_least(Role::ChapterOrganiser) {
        return Role::ALL
            .iter()
            .copied()
            .filter(|r| *r != Role::GodMode && r.level() < actor.role.level())
            .collect();
    }

    Vec::new()
}

/// Audience a published announcement reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementScope {
    Global,
    Regional,
    Chapter,
}

/// Announcement scopes `actor` may post to, widest first.
pub fn postable_scopes(actor: &User) -> Vec<AnnouncementScope> {
    if actor.role.at_least(Role::GlobalAdmin) {
        return vec![
            AnnouncementScope::Global,
            AnnouncementScope::Regional,
            AnnouncementScope::Chapter,
        ];
    }
    match actor.role {
        Role::RegionalOrganiser => vec![AnnouncementScope::Regional, AnnouncementScope::Chapter],
        Role::ChapterOrganiser => vec![AnnouncementScope::Chapter],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapterflow_core::UserId;
    use chapterflow_members::ChapterName;
    use chrono::Utc;
    use proptest::prelude::*;

    fn member(role: Role) -> User {
        let mut user = User::applicant(
            UserId::new(),
            "Test",
            "test@example.com",
            ChapterName::new("Berlin"),
            Utc::now(),
        );
        user.role = role;
        user
    }

    #[test]
    fn godmode_assigns_anything() {
        assert_eq!(assignable_roles(&member(Role::GodMode)), Role::ALL.to_vec());
    }

    #[test]
    fn global_admin_assigns_up_to_regional() {
        let roles = assignable_roles(&member(Role::GlobalAdmin));
        assert!(roles.contains(&Role::RegionalOrganiser));
        assert!(!roles.contains(&Role::GlobalAdmin));
        assert!(!roles.contains(&Role::GodMode));
    }

    #[test]
    fn chapter_organiser_assigns_strictly_below() {
        let roles = assignable_roles(&member(Role::ChapterOrganiser));
        assert_eq!(
            roles,
            vec![Role::Applicant, Role::Activist, Role::ConfirmedActivist]
        );
    }

    #[test]
    fn rank_and_file_assign_nothing() {
        for role in [Role::Applicant, Role::Activist, Role::ConfirmedActivist] {
            assert!(assignable_roles(&member(role)).is_empty());
        }
    }

    #[test]
    fn announcement_scopes_by_rank() {
        assert_eq!(postable_scopes(&member(Role::GodMode)).len(), 3);
        assert_eq!(
            postable_scopes(&member(Role::RegionalOrganiser)),
            vec![AnnouncementScope::Regional, AnnouncementScope::Chapter]
        );
        assert_eq!(
            postable_scopes(&member(Role::ChapterOrganiser)),
            vec![AnnouncementScope::Chapter]
        );
        assert!(postable_scopes(&member(Role::Activist)).is_empty());
    }

    proptest! {
        /// Property: no self-escalation. Below GodMode, the assignable set
        /// never contains a role at or above the actor's own level.
        #[test]
        fn no_self_escalation(role in prop::sample::select(Role::ALL.to_vec())) {
            prop_assume!(role != Role::GodMode);
            let actor = member(role);
            for assignable in assignable_roles(&actor) {
                prop_assert!(assignable.level() < role.level());
            }
        }
    }
}
