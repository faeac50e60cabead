//! Outreach events ("cubes").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chapterflow_core::{Entity, EventId, UserId};

use crate::chapter::ChapterName;

/// A street outreach event.
///
/// Carries only what authorization needs: who organises it and which chapter
/// (city) hosts it. RSVP lists, inventory and reports live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeEvent {
    pub id: EventId,
    /// Hosting chapter; event city and chapter name are the same key.
    pub city: ChapterName,
    pub organiser: UserId,
    pub starts_at: DateTime<Utc>,
}

impl Entity for CubeEvent {
    type Id = EventId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
