//! Members: identity, role, chapter memberships and onboarding state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chapterflow_core::{Entity, UserId};

use crate::chapter::{ChapterName, CountryName};
use crate::role::Role;

// ─────────────────────────────────────────────────────────────────────────────
// Onboarding status
// ─────────────────────────────────────────────────────────────────────────────

/// Stage of the multi-step verification workflow.
///
/// The set of reachable targets from each stage lives in the onboarding
/// crate's transition table — that table is the single source of truth; no
/// caller may set a status without going through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnboardingStatus {
    PendingApplicationReview,
    PendingOnboardingCall,
    AwaitingFirstCube,
    AwaitingMasterclass,
    AwaitingRevisionCall,
    Confirmed,
    Denied,
    Inactive,
}

impl OnboardingStatus {
    /// Terminal statuses have no outbound edges in the transition table.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OnboardingStatus::Confirmed | OnboardingStatus::Denied | OnboardingStatus::Inactive
        )
    }
}

impl core::fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            OnboardingStatus::PendingApplicationReview => "Pending Application Review",
            OnboardingStatus::PendingOnboardingCall => "Pending Onboarding Call",
            OnboardingStatus::AwaitingFirstCube => "Awaiting First Cube",
            OnboardingStatus::AwaitingMasterclass => "Awaiting Masterclass",
            OnboardingStatus::AwaitingRevisionCall => "Awaiting Revision Call",
            OnboardingStatus::Confirmed => "Confirmed",
            OnboardingStatus::Denied => "Denied",
            OnboardingStatus::Inactive => "Inactive",
        };
        f.write_str(name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Progress flags and stats
// ─────────────────────────────────────────────────────────────────────────────

/// Auxiliary onboarding progress, advanced alongside (not instead of) status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnboardingProgress {
    pub watched_masterclass: bool,
    pub selected_organiser_id: Option<UserId>,
    pub onboarding_call_scheduled_at: Option<DateTime<Utc>>,
    pub onboarding_call_contact: Option<String>,
    pub revision_call_scheduled_at: Option<DateTime<Utc>>,
    pub revision_call_contact: Option<String>,
}

/// Participation counters.
///
/// `cubes_attended` is monotonically non-decreasing; use [`UserStats::record_event`]
/// rather than assigning the field so the invariant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub total_hours: u32,
    pub cubes_attended: u32,
    pub conversations: u32,
}

impl UserStats {
    /// Fold one attended event into the counters.
    pub fn record_event(&mut self, hours: u32, conversations: u32) {
        self.total_hours += hours;
        self.cubes_attended += 1;
        self.conversations += conversations;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// A member of the organisation.
///
/// # Invariants
/// - `organiser_of` is meaningful only for `ChapterOrganiser`.
/// - `managed_country` is meaningful only for `RegionalOrganiser`.
/// - `onboarding_status` changes only through the onboarding engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Chapters this member belongs to.
    pub chapters: Vec<ChapterName>,
    /// Chapters this member administers (chapter organisers only).
    pub organiser_of: Vec<ChapterName>,
    /// Country this member administers (regional organisers only).
    pub managed_country: Option<CountryName>,
    pub onboarding_status: OnboardingStatus,
    pub progress: OnboardingProgress,
    pub stats: UserStats,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// A freshly registered applicant awaiting review.
    pub fn applicant(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        chapter: ChapterName,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: Role::Applicant,
            chapters: vec![chapter],
            organiser_of: Vec::new(),
            managed_country: None,
            onboarding_status: OnboardingStatus::PendingApplicationReview,
            progress: OnboardingProgress::default(),
            stats: UserStats::default(),
            joined_at,
        }
    }

    /// The chapter an applicant signed up through (first membership).
    pub fn home_chapter(&self) -> Option<&ChapterName> {
        self.chapters.first()
    }

    pub fn member_of(&self, chapter: &ChapterName) -> bool {
        self.chapters.contains(chapter)
    }

    pub fn organises(&self, chapter: &ChapterName) -> bool {
        self.organiser_of.contains(chapter)
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
