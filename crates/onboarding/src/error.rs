//! Structured errors for rejected onboarding commands.

use thiserror::Error;

use chapterflow_core::UserId;
use chapterflow_members::{ChapterName, OnboardingStatus};

/// Why a command was rejected.
///
/// Invalid transitions/states are caller-recoverable (disable the UI action,
/// log for audit); not-found is an input error, distinct from a denial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// `(from, to)` is not an edge in the transition table.
    #[error("invalid transition from '{from}' to '{to}'")]
    InvalidTransition {
        from: OnboardingStatus,
        to: OnboardingStatus,
    },

    /// A command's precondition on the current status/flags is unmet.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("organiser {0} not found")]
    OrganiserNotFound(UserId),

    #[error("chapter '{0}' not found")]
    ChapterNotFound(ChapterName),
}
