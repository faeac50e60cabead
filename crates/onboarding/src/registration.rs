//! Applicant registration and application routing.

use chrono::{DateTime, Utc};

use chapterflow_core::UserId;
use chapterflow_members::{ChapterName, Role, User};
use chapterflow_notifications::{NotificationDraft, NotificationType};

use crate::engine::OnboardingEngine;

/// What a sign-up form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub chapter: ChapterName,
}

impl OnboardingEngine<'_> {
    /// Create an applicant from a submitted form and route the application.
    ///
    /// Organisers of the chosen chapter get a `NewApplicant` record. When a
    /// chapter has no organiser the application escalates to the chapter
    /// country's regional organisers, and from there to the global admins, so
    /// no application lands in a queue nobody reads. The applicant gets an
    /// acknowledgement either way.
    ///
    /// The returned member is not persisted here; the caller writes it to the
    /// user store.
    pub fn register_applicant(&self, form: ApplicationForm, now: DateTime<Utc>) -> User {
        let user = User::applicant(UserId::new(), form.name, form.email, form.chapter, now);
        let chapter = user.home_chapter().cloned();

        let mut reviewers: Vec<User> = self
            .users()
            .with_role(Role::ChapterOrganiser)
            .into_iter()
            .filter(|o| chapter.as_ref().is_some_and(|c| o.organises(c)))
            .collect();

        if reviewers.is_empty() {
            if let Some(country) = chapter
                .as_ref()
                .and_then(|c| self.chapters().get(c))
                .map(|c| c.country)
            {
                reviewers = self
                    .users()
                    .with_role(Role::RegionalOrganiser)
                    .into_iter()
                    .filter(|o| o.managed_country.as_ref() == Some(&country))
                    .collect();
            }
        }

        if reviewers.is_empty() {
            reviewers = self.users().with_role(Role::GlobalAdmin);
        }

        let chapter_label = chapter
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "your chapter".to_string());

        for reviewer in reviewers {
            self.notify(NotificationDraft {
                user_id: reviewer.id,
                kind: NotificationType::NewApplicant,
                message: format!(
                    "{} has applied to join the {chapter_label} chapter.",
                    user.name
                ),
                link_to: "/manage".to_string(),
                related_user: Some(user.id),
            });
        }

        self.notify(NotificationDraft {
            user_id: user.id,
            kind: NotificationType::ApplicationReceived,
            message: format!(
                "Welcome, {}! Your application for {chapter_label} has been submitted for \
                 review.",
                user.name
            ),
            link_to: "/onboarding-status".to_string(),
            related_user: None,
        });

        user
    }
}
