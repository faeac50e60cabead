//! The static transition table — the single source of truth for status edges.

use chapterflow_members::OnboardingStatus;

/// Statuses reachable from `from` in one validated step.
///
/// The workflow is a DAG, not a chain: a first cube forks depending on
/// whether the masterclass was already watched, and review stages can end in
/// `Denied`. Terminal statuses have no outbound edges.
pub fn allowed_targets(from: OnboardingStatus) -> &'static [OnboardingStatus] {
    match from {
        OnboardingStatus::PendingApplicationReview => &[
            OnboardingStatus::PendingOnboardingCall,
            OnboardingStatus::Denied,
        ],
        OnboardingStatus::PendingOnboardingCall => &[
            OnboardingStatus::AwaitingFirstCube,
            OnboardingStatus::Denied,
        ],
        OnboardingStatus::AwaitingFirstCube => &[
            OnboardingStatus::AwaitingMasterclass,
            OnboardingStatus::AwaitingRevisionCall,
        ],
        OnboardingStatus::AwaitingMasterclass => &[OnboardingStatus::AwaitingRevisionCall],
        OnboardingStatus::AwaitingRevisionCall => &[OnboardingStatus::Confirmed],
        OnboardingStatus::Confirmed | OnboardingStatus::Denied | OnboardingStatus::Inactive => &[],
    }
}

/// Is `(from, to)` an edge in the table?
pub fn is_valid_transition(from: OnboardingStatus, to: OnboardingStatus) -> bool {
    allowed_targets(from).contains(&to)
}
