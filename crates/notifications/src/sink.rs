//! Notification sink: where emitted records go.

use std::sync::Mutex;

use chrono::Utc;

use crate::notification::{Notification, NotificationDraft};

/// Consumes notification drafts.
///
/// Fire-and-forget from the engines' perspective: emission never blocks a
/// decision and never fails it. Real sinks persist and deliver; the in-memory
/// one just collects.
pub trait NotificationSink {
    fn push(&self, draft: NotificationDraft);
}

/// In-memory sink for tests/dev.
///
/// - No IO / no async
/// - Best-effort: a poisoned lock drops the record rather than panicking
#[derive(Debug, Default)]
pub struct InMemorySink {
    accepted: Mutex<Vec<Notification>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything accepted so far, in emission order.
    pub fn accepted(&self) -> Vec<Notification> {
        match self.accepted.lock() {
            Ok(accepted) => accepted.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl NotificationSink for InMemorySink {
    fn push(&self, draft: NotificationDraft) {
        if let Ok(mut accepted) = self.accepted.lock() {
            accepted.push(Notification::accept(draft, Utc::now()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationType;
    use chapterflow_core::UserId;

    #[test]
    fn push_accepts_in_order() {
        let sink = InMemorySink::new();
        let recipient = UserId::new();

        for message in ["first", "second"] {
            sink.push(NotificationDraft {
                user_id: recipient,
                kind: NotificationType::RequestAccepted,
                message: message.to_string(),
                link_to: "/dashboard".to_string(),
                related_user: None,
            });
        }

        let accepted = sink.accepted();
        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].message, "first");
        assert_eq!(accepted[1].message, "second");
        assert_ne!(accepted[0].id, accepted[1].id);
    }
}
