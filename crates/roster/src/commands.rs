//! Role and chapter administration commands.

use chapterflow_auth::{assignable_roles, can, Permission, PermissionContext};
use chapterflow_core::{DomainError, DomainResult, UserId};
use chapterflow_members::{ChapterDirectory, ChapterName, Role, User, UserDirectory};
use chapterflow_notifications::{NotificationDraft, NotificationSink, NotificationType};

/// Member-administration commands, authorization-checked at the boundary.
pub struct RosterService<'a> {
    users: &'a dyn UserDirectory,
    chapters: &'a dyn ChapterDirectory,
    sink: &'a dyn NotificationSink,
}

impl<'a> RosterService<'a> {
    pub fn new(
        users: &'a dyn UserDirectory,
        chapters: &'a dyn ChapterDirectory,
        sink: &'a dyn NotificationSink,
    ) -> Self {
        Self {
            users,
            chapters,
            sink,
        }
    }

    fn load_target(&self, target_id: UserId) -> DomainResult<User> {
        self.users
            .get(target_id)
            .ok_or_else(|| DomainError::not_found(format!("user {target_id}")))
    }

    /// Change a member's role.
    ///
    /// Requires `EditUserRoles` over the target and that the new role is in
    /// the actor's assignable set. Demotion below ChapterOrganiser clears the
    /// organised chapter set.
    pub fn assign_role(
        &self,
        actor: &User,
        target_id: UserId,
        new_role: Role,
    ) -> DomainResult<User> {
        let target = self.load_target(target_id)?;
        let all_chapters = self.chapters.list_all();

        if !can(
            Some(actor),
            Permission::EditUserRoles,
            PermissionContext::for_target(&target, &all_chapters),
        ) {
            return Err(DomainError::Unauthorized);
        }
        if !assignable_roles(actor).contains(&new_role) {
            return Err(DomainError::validation(format!(
                "role '{new_role}' is not assignable by this actor"
            )));
        }

        let mut next = target;
        next.role = new_role;
        if !new_role.at_least(Role::ChapterOrganiser) {
            next.organiser_of.clear();
        }

        tracing::info!(member = %next.id, role = %new_role, actor = %actor.id, "role updated");

        self.sink.push(NotificationDraft {
            user_id: next.id,
            kind: NotificationType::RoleUpdated,
            message: format!(
                "Your role has been updated to {new_role} by {}.",
                actor.name
            ),
            link_to: format!("/members/{}", next.id),
            related_user: Some(actor.id),
        });

        Ok(next)
    }

    /// Replace a member's chapter memberships.
    pub fn update_chapters(
        &self,
        actor: &User,
        target_id: UserId,
        new_chapters: Vec<ChapterName>,
    ) -> DomainResult<User> {
        let target = self.load_target(target_id)?;
        let all_chapters = self.chapters.list_all();

        if !can(
            Some(actor),
            Permission::EditUserChapters,
            PermissionContext::for_target(&target, &all_chapters),
        ) {
            return Err(DomainError::Unauthorized);
        }

        let added: Vec<_> = new_chapters
            .iter()
            .filter(|c| !target.chapters.contains(c))
            .cloned()
            .collect();
        let removed: Vec<_> = target
            .chapters
            .iter()
            .filter(|c| !new_chapters.contains(c))
            .cloned()
            .collect();

        let mut next = target;
        next.chapters = new_chapters;

        if !added.is_empty() || !removed.is_empty() {
            let message = if !added.is_empty() {
                format!("You have been added to the {} chapter(s).", join(&added))
            } else {
                format!(
                    "You have been removed from the {} chapter(s).",
                    join(&removed)
                )
            };

            tracing::info!(member = %next.id, actor = %actor.id, "chapter memberships updated");

            self.sink.push(NotificationDraft {
                user_id: next.id,
                kind: NotificationType::ChapterMembershipUpdated,
                message,
                link_to: format!("/members/{}", next.id),
                related_user: Some(actor.id),
            });
        }

        Ok(next)
    }

    /// Promote a member to chapter organiser of the given chapters.
    pub fn appoint_organiser(
        &self,
        actor: &User,
        target_id: UserId,
        chapters_to_organise: Vec<ChapterName>,
    ) -> DomainResult<User> {
        let target = self.load_target(target_id)?;
        let all_chapters = self.chapters.list_all();

        if !can(
            Some(actor),
            Permission::EditUserRoles,
            PermissionContext::for_target(&target, &all_chapters),
        ) {
            return Err(DomainError::Unauthorized);
        }
        if !assignable_roles(actor).contains(&Role::ChapterOrganiser) {
            return Err(DomainError::validation(
                "role 'Chapter Organiser' is not assignable by this actor",
            ));
        }

        let mut next = target;
        next.role = Role::ChapterOrganiser;
        next.organiser_of.clear();
        for chapter in chapters_to_organise {
            if !next.organiser_of.contains(&chapter) {
                next.organiser_of.push(chapter);
            }
        }

        tracing::info!(member = %next.id, actor = %actor.id, "organiser appointed");

        self.sink.push(NotificationDraft {
            user_id: next.id,
            kind: NotificationType::RoleUpdated,
            message: format!(
                "Your role has been updated to {} by {}.",
                Role::ChapterOrganiser,
                actor.name
            ),
            link_to: format!("/members/{}", next.id),
            related_user: Some(actor.id),
        });

        Ok(next)
    }
}

fn join(chapters: &[ChapterName]) -> String {
    chapters
        .iter()
        .map(ChapterName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapterflow_members::{Chapter, CountryName, InMemoryDirectory, OnboardingStatus};
    use chapterflow_notifications::InMemorySink;
    use chrono::Utc;

    struct Fixture {
        dir: InMemoryDirectory,
        sink: InMemorySink,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = InMemoryDirectory::new();
            dir.put_chapter(Chapter::new("Berlin", "Germany"));
            dir.put_chapter(Chapter::new("Hamburg", "Germany"));
            dir.put_chapter(Chapter::new("Paris", "France"));
            Self {
                dir,
                sink: InMemorySink::new(),
            }
        }

        fn service(&self) -> RosterService<'_> {
            RosterService::new(&self.dir, &self.dir, &self.sink)
        }

        fn seed(&self, name: &str, role: Role, chapters: &[&'static str]) -> User {
            let mut user = User::applicant(
                UserId::new(),
                name,
                format!("{name}@example.com"),
                ChapterName::new(chapters.first().copied().unwrap_or("Berlin")),
                Utc::now(),
            );
            user.role = role;
            user.chapters = chapters.iter().map(|c| ChapterName::new(*c)).collect();
            user.onboarding_status = OnboardingStatus::Confirmed;
            self.dir.put_user(user.clone());
            user
        }
    }

    #[test]
    fn admin_assigns_role_and_member_is_notified() {
        let fixture = Fixture::new();
        let admin = fixture.seed("Ada", Role::GlobalAdmin, &[]);
        let target = fixture.seed("Sam", Role::Activist, &["Berlin"]);

        let next = fixture
            .service()
            .assign_role(&admin, target.id, Role::ConfirmedActivist)
            .unwrap();
        assert_eq!(next.role, Role::ConfirmedActivist);

        let accepted = fixture.sink.accepted();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].kind, NotificationType::RoleUpdated);
        assert_eq!(accepted[0].related_user, Some(admin.id));
    }

    #[test]
    fn demotion_clears_organised_chapters() {
        let fixture = Fixture::new();
        let admin = fixture.seed("Ada", Role::GlobalAdmin, &[]);
        let mut organiser = fixture.seed("Grace", Role::ChapterOrganiser, &["Berlin"]);
        organiser.organiser_of = vec![ChapterName::new("Berlin")];
        fixture.dir.put_user(organiser.clone());

        let next = fixture
            .service()
            .assign_role(&admin, organiser.id, Role::Activist)
            .unwrap();
        assert_eq!(next.role, Role::Activist);
        assert!(next.organiser_of.is_empty());
    }

    #[test]
    fn actor_cannot_grant_a_role_at_or_above_their_own() {
        let fixture = Fixture::new();
        let admin = fixture.seed("Ada", Role::GlobalAdmin, &[]);
        let target = fixture.seed("Sam", Role::Activist, &["Berlin"]);

        let err = fixture
            .service()
            .assign_role(&admin, target.id, Role::GlobalAdmin)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn out_of_scope_actor_is_unauthorized() {
        let fixture = Fixture::new();
        let mut regional = fixture.seed("Marie", Role::RegionalOrganiser, &[]);
        regional.managed_country = Some(CountryName::new("France"));
        fixture.dir.put_user(regional.clone());
        let target = fixture.seed("Sam", Role::Activist, &["Berlin"]);

        let err = fixture
            .service()
            .assign_role(&regional, target.id, Role::Activist)
            .unwrap_err();
        assert_eq!(err, DomainError::Unauthorized);
    }

    #[test]
    fn unknown_target_is_not_found() {
        let fixture = Fixture::new();
        let admin = fixture.seed("Ada", Role::GlobalAdmin, &[]);

        let err = fixture
            .service()
            .assign_role(&admin, UserId::new(), Role::Activist)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn chapter_update_reports_additions() {
        let fixture = Fixture::new();
        let admin = fixture.seed("Ada", Role::GlobalAdmin, &[]);
        let target = fixture.seed("Sam", Role::Activist, &["Berlin"]);

        let next = fixture
            .service()
            .update_chapters(
                &admin,
                target.id,
                vec![ChapterName::new("Berlin"), ChapterName::new("Hamburg")],
            )
            .unwrap();
        assert_eq!(next.chapters.len(), 2);

        let accepted = fixture.sink.accepted();
        assert_eq!(accepted.len(), 1);
        assert!(accepted[0].message.contains("added to the Hamburg"));
    }

    #[test]
    fn unchanged_chapters_stay_silent() {
        let fixture = Fixture::new();
        let admin = fixture.seed("Ada", Role::GlobalAdmin, &[]);
        let target = fixture.seed("Sam", Role::Activist, &["Berlin"]);

        fixture
            .service()
            .update_chapters(&admin, target.id, vec![ChapterName::new("Berlin")])
            .unwrap();
        assert!(fixture.sink.accepted().is_empty());
    }

    #[test]
    fn appoint_organiser_deduplicates_chapters() {
        let fixture = Fixture::new();
        let admin = fixture.seed("Ada", Role::GlobalAdmin, &[]);
        let target = fixture.seed("Sam", Role::ConfirmedActivist, &["Berlin"]);

        let next = fixture
            .service()
            .appoint_organiser(
                &admin,
                target.id,
                vec![
                    ChapterName::new("Berlin"),
                    ChapterName::new("Berlin"),
                    ChapterName::new("Hamburg"),
                ],
            )
            .unwrap();
        assert_eq!(next.role, Role::ChapterOrganiser);
        assert_eq!(next.organiser_of.len(), 2);
    }

    #[test]
    fn chapter_organiser_cannot_appoint_organisers() {
        let fixture = Fixture::new();
        let mut organiser = fixture.seed("Grace", Role::ChapterOrganiser, &["Berlin"]);
        organiser.organiser_of = vec![ChapterName::new("Berlin")];
        fixture.dir.put_user(organiser.clone());
        let target = fixture.seed("Sam", Role::Activist, &["Berlin"]);

        let err = fixture
            .service()
            .appoint_organiser(&organiser, target.id, vec![ChapterName::new("Berlin")])
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
