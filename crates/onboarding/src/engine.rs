//! Onboarding commands: validated transitions and auto-advance.

use chrono::{DateTime, Utc};

use chapterflow_core::UserId;
use chapterflow_members::{ChapterDirectory, OnboardingStatus, Role, User, UserDirectory};
use chapterflow_notifications::{NotificationDraft, NotificationSink, NotificationType};

use crate::error::TransitionError;
use crate::transitions;

/// The onboarding lifecycle engine.
///
/// Holds no state of its own: directories are the read side, the sink takes
/// outbound records, and every command maps a member snapshot to a new
/// snapshot (or an error). Persisting the result is the caller's job, with
/// writes serialized per user id.
pub struct OnboardingEngine<'a> {
    users: &'a dyn UserDirectory,
    chapters: &'a dyn ChapterDirectory,
    sink: &'a dyn NotificationSink,
}

impl<'a> OnboardingEngine<'a> {
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

    pub(crate) fn users(&self) -> &dyn UserDirectory {
        self.users
    }

    pub(crate) fn chapters(&self) -> &dyn ChapterDirectory {
        self.chapters
    }

    pub(crate) fn notify(&self, draft: NotificationDraft) {
        self.sink.push(draft);
    }

    /// Move a member to `target`, if the table has that edge.
    ///
    /// With an approver supplied, the member is told what the new stage asks
    /// of them (or who denied them). Without one — e.g. system-driven
    /// advances that notify separately — the status change is silent.
    pub fn transition(
        &self,
        user: &User,
        target: OnboardingStatus,
        approver: Option<&User>,
    ) -> Result<User, TransitionError> {
        if !transitions::is_valid_transition(user.onboarding_status, target) {
            return Err(TransitionError::InvalidTransition {
                from: user.onboarding_status,
                to: target,
            });
        }

        let mut next = user.clone();
        next.onboarding_status = target;

        if let Some(approver) = approver {
            if let Some(draft) = stage_notification(&next, target, approver) {
                self.notify(draft);
            }
        }

        Ok(next)
    }

    /// Record that the member watched the masterclass and advance to the
    /// revision-call stage in the same atomic step.
    pub fn confirm_masterclass_watched(&self, user: &User) -> Result<User, TransitionError> {
        if user.onboarding_status != OnboardingStatus::AwaitingMasterclass {
            return Err(TransitionError::InvalidState(format!(
                "cannot confirm masterclass while '{}'",
                user.onboarding_status
            )));
        }

        let mut next = user.clone();
        next.progress.watched_masterclass = true;
        next.onboarding_status = OnboardingStatus::AwaitingRevisionCall;

        self.notify(NotificationDraft {
            user_id: next.id,
            kind: NotificationType::RequestAccepted,
            message: "Great! You completed the masterclass. Next: schedule your revision call \
                      to get verified."
                .to_string(),
            link_to: "/dashboard".to_string(),
            related_user: None,
        });

        Ok(next)
    }

    /// Book the onboarding call with a chosen organiser. Status is untouched;
    /// the reviewing organiser advances it after the call.
    pub fn schedule_onboarding_call(
        &self,
        user: &User,
        organiser_id: UserId,
        when: DateTime<Utc>,
        contact: impl Into<String>,
    ) -> Result<User, TransitionError> {
        let organiser = self
            .users
            .get(organiser_id)
            .ok_or(TransitionError::OrganiserNotFound(organiser_id))?;

        if user.onboarding_status != OnboardingStatus::PendingOnboardingCall {
            return Err(TransitionError::InvalidState(format!(
                "cannot schedule onboarding call while '{}'",
                user.onboarding_status
            )));
        }

        let contact = contact.into();
        let mut next = user.clone();
        next.progress.selected_organiser_id = Some(organiser.id);
        next.progress.onboarding_call_scheduled_at = Some(when);
        next.progress.onboarding_call_contact = Some(contact.clone());

        self.notify(NotificationDraft {
            user_id: next.id,
            kind: NotificationType::CallScheduled,
            message: "Onboarding call scheduled! Please attend to continue your onboarding."
                .to_string(),
            link_to: "/dashboard".to_string(),
            related_user: None,
        });
        self.notify(NotificationDraft {
            user_id: organiser.id,
            kind: NotificationType::CallScheduled,
            message: format!(
                "{} scheduled an onboarding call for {}. Contact: {}",
                next.name, when, contact
            ),
            link_to: format!("/manage/member/{}", next.id),
            related_user: Some(next.id),
        });

        Ok(next)
    }

    /// Book the revision call. Finalization is a separate explicit step:
    /// `Confirmed` is only ever reached through [`Self::finalize`].
    pub fn schedule_revision_call(
        &self,
        user: &User,
        organiser_id: UserId,
        when: DateTime<Utc>,
        contact: impl Into<String>,
    ) -> Result<User, TransitionError> {
        let organiser = self
            .users
            .get(organiser_id)
            .ok_or(TransitionError::OrganiserNotFound(organiser_id))?;

        if user.onboarding_status != OnboardingStatus::AwaitingRevisionCall {
            return Err(TransitionError::InvalidState(format!(
                "cannot schedule revision call while '{}'",
                user.onboarding_status
            )));
        }

        let contact = contact.into();
        let mut next = user.clone();
        next.progress.selected_organiser_id = Some(organiser.id);
        next.progress.revision_call_scheduled_at = Some(when);
        next.progress.revision_call_contact = Some(contact.clone());

        self.notify(NotificationDraft {
            user_id: next.id,
            kind: NotificationType::CallScheduled,
            message: "Revision call scheduled! Please attend the call to complete your \
                      onboarding."
                .to_string(),
            link_to: "/dashboard".to_string(),
            related_user: None,
        });
        self.notify(NotificationDraft {
            user_id: organiser.id,
            kind: NotificationType::CallScheduled,
            message: format!(
                "{} scheduled a revision call for {}. Contact: {}",
                next.name, when, contact
            ),
            link_to: format!("/manage/member/{}", next.id),
            related_user: Some(next.id),
        });

        Ok(next)
    }

    /// Auto-advance on the attendance fact.
    ///
    /// Invoked by the event-report subsystem once its stats update lands.
    /// The target is re-derived from the member's own progress flags — never
    /// caller-supplied — so the masterclass can't be skipped. Outside
    /// `AwaitingFirstCube` (or with no attendance yet) only the counter is
    /// folded in, monotonically.
    pub fn record_cube_attendance(&self, user: &User, cubes_attended: u32) -> User {
        let mut next = user.clone();
        next.stats.cubes_attended = next.stats.cubes_attended.max(cubes_attended);

        if user.onboarding_status != OnboardingStatus::AwaitingFirstCube || cubes_attended == 0 {
            return next;
        }

        let (target, message) = if next.progress.watched_masterclass {
            (
                OnboardingStatus::AwaitingRevisionCall,
                "Great! Your first Cube attendance is confirmed. Next: schedule your \
                 revision call.",
            )
        } else {
            (
                OnboardingStatus::AwaitingMasterclass,
                "Nice! You completed your first Cube. Next: complete the masterclass.",
            )
        };
        next.onboarding_status = target;

        self.notify(NotificationDraft {
            user_id: next.id,
            kind: NotificationType::RequestAccepted,
            message: message.to_string(),
            link_to: "/dashboard".to_string(),
            related_user: None,
        });

        next
    }

    /// The explicit confirmation step after a passed revision call.
    ///
    /// Requires the call to have been scheduled and the masterclass watched;
    /// goes through the transition table like every other status change and
    /// promotes Applicant/Activist to ConfirmedActivist.
    pub fn finalize(&self, user: &User, approver: &User) -> Result<User, TransitionError> {
        if user.progress.revision_call_scheduled_at.is_none() {
            return Err(TransitionError::InvalidState(
                "no revision call has been scheduled".to_string(),
            ));
        }
        if !user.progress.watched_masterclass {
            return Err(TransitionError::InvalidState(
                "masterclass has not been watched".to_string(),
            ));
        }

        let mut next = self.transition(user, OnboardingStatus::Confirmed, Some(approver))?;
        if matches!(next.role, Role::Applicant | Role::Activist) {
            next.role = Role::ConfirmedActivist;
        }
        Ok(next)
    }
}

/// What to tell the member about the stage they just reached.
fn stage_notification(
    user: &User,
    target: OnboardingStatus,
    approver: &User,
) -> Option<NotificationDraft> {
    let chapter = user
        .home_chapter()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "your chapter".to_string());

    let (kind, message, link_to, related_user) = match target {
        OnboardingStatus::PendingOnboardingCall => (
            NotificationType::RequestAccepted,
            format!(
                "Your application for {chapter} was approved by {}! Next: schedule your \
                 onboarding call.",
                approver.name
            ),
            "/dashboard",
            None,
        ),
        OnboardingStatus::AwaitingFirstCube => (
            NotificationType::RequestAccepted,
            "Great progress! Next: attend your first Cube with your chapter.".to_string(),
            "/dashboard",
            None,
        ),
        OnboardingStatus::AwaitingMasterclass => (
            NotificationType::RequestAccepted,
            "Nice! You completed your first Cube. Next: complete the masterclass.".to_string(),
            "/dashboard",
            None,
        ),
        OnboardingStatus::AwaitingRevisionCall => (
            NotificationType::RequestAccepted,
            "Great! You completed the masterclass. Next: pass the revision call to get \
             verified."
                .to_string(),
            "/dashboard",
            None,
        ),
        OnboardingStatus::Confirmed => (
            NotificationType::RequestAccepted,
            "You're fully confirmed! Welcome aboard.".to_string(),
            "/dashboard",
            None,
        ),
        OnboardingStatus::Denied => (
            NotificationType::RequestDenied,
            format!("Your application for {chapter} was not approved at this time."),
            "/onboarding-status",
            Some(approver.id),
        ),
        OnboardingStatus::PendingApplicationReview | OnboardingStatus::Inactive => return None,
    };

    Some(NotificationDraft {
        user_id: user.id,
        kind,
        message,
        link_to: link_to.to_string(),
        related_user,
    })
}
