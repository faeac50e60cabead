//! `chapterflow-notifications` — outbound notification records.
//!
//! The engines *produce* records; delivery is an external sink's concern and
//! may be asynchronous, retried or batched there.

pub mod notification;
pub mod sink;

pub use notification::{Notification, NotificationDraft, NotificationType};
pub use sink::{InMemorySink, NotificationSink};
