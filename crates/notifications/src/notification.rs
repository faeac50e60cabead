//! Notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chapterflow_core::{Entity, NotificationId, UserId};

/// Kind of notification, used by the UI for grouping and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// A new application landed in an organiser's queue.
    NewApplicant,
    /// The applicant's own submission acknowledgement.
    ApplicationReceived,
    /// An onboarding step was approved / advanced.
    RequestAccepted,
    /// An application was denied.
    RequestDenied,
    /// A call was scheduled with an organiser.
    CallScheduled,
    /// A member's role changed.
    RoleUpdated,
    /// A member's chapter memberships changed.
    ChapterMembershipUpdated,
}

/// What a caller supplies when emitting a notification.
///
/// The sink assigns id and timestamp on acceptance; drafts carry everything
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDraft {
    /// Recipient.
    pub user_id: UserId,
    pub kind: NotificationType,
    pub message: String,
    /// In-app route the notification links to.
    pub link_to: String,
    /// The member this notification is about, if any (e.g. the approver).
    pub related_user: Option<UserId>,
}

/// A stored notification.
///
/// Append-only: never mutated after creation except for the `is_read` flag,
/// which only the recipient flips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub kind: NotificationType,
    pub message: String,
    pub link_to: String,
    pub related_user: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl Notification {
    /// Accept a draft, assigning id and timestamp.
    pub fn accept(draft: NotificationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: NotificationId::new(),
            user_id: draft.user_id,
            kind: draft.kind,
            message: draft.message,
            link_to: draft.link_to,
            related_user: draft.related_user,
            created_at: now,
            is_read: false,
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

impl Entity for Notification {
    type Id = NotificationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_assigns_identity_and_starts_unread() {
        let recipient = UserId::new();
        let draft = NotificationDraft {
            user_id: recipient,
            kind: NotificationType::RequestAccepted,
            message: "Great progress!".to_string(),
            link_to: "/dashboard".to_string(),
            related_user: None,
        };

        let now = Utc::now();
        let stored = Notification::accept(draft, now);
        assert_eq!(stored.user_id, recipient);
        assert_eq!(stored.created_at, now);
        assert!(!stored.is_read);
    }

    #[test]
    fn mark_read_flips_only_the_flag() {
        let draft = NotificationDraft {
            user_id: UserId::new(),
            kind: NotificationType::NewApplicant,
            message: "Sam applied".to_string(),
            link_to: "/manage".to_string(),
            related_user: Some(UserId::new()),
        };
        let mut stored = Notification::accept(draft, Utc::now());
        let before = stored.clone();
        stored.mark_read();
        assert!(stored.is_read);
        assert_eq!(stored.message, before.message);
        assert_eq!(stored.id, before.id);
    }
}
