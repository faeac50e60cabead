//! Consistency audit, independent of the transition table.
//!
//! Detects states that the table permits but whose cross-field invariants do
//! not hold. Diagnostic, not corrective: findings are for operator
//! remediation, never blocking errors.

use chapterflow_members::{OnboardingStatus, User};

/// Result of auditing one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingAudit {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

/// Check a member's onboarding fields against each other.
///
/// Pure over the snapshot: calling it twice on an unchanged member yields
/// identical results.
pub fn validate(user: &User) -> OnboardingAudit {
    let mut issues = Vec::new();

    if user.onboarding_status == OnboardingStatus::Confirmed && !user.progress.watched_masterclass {
        issues.push("confirmed member has not watched the masterclass".to_string());
    }

    if user.onboarding_status == OnboardingStatus::AwaitingRevisionCall
        && user.stats.cubes_attended == 0
    {
        issues.push("member awaiting revision call has not attended any cubes".to_string());
    }

    if user.onboarding_status == OnboardingStatus::AwaitingMasterclass
        && user.progress.watched_masterclass
    {
        issues.push("member awaiting masterclass has already watched it".to_string());
    }

    OnboardingAudit {
        is_valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapterflow_core::UserId;
    use chapterflow_members::ChapterName;
    use chrono::Utc;

    fn member(status: OnboardingStatus) -> User {
        let mut user = User::applicant(
            UserId::new(),
            "Test",
            "test@example.com",
            ChapterName::new("Berlin"),
            Utc::now(),
        );
        user.onboarding_status = status;
        user
    }

    #[test]
    fn clean_state_has_no_findings() {
        let user = member(OnboardingStatus::AwaitingFirstCube);
        assert!(validate(&user).is_valid);
    }

    #[test]
    fn confirmed_without_masterclass_is_flagged() {
        let user = member(OnboardingStatus::Confirmed);
        let audit = validate(&user);
        assert!(!audit.is_valid);
        assert_eq!(audit.issues.len(), 1);
    }

    #[test]
    fn revision_call_with_zero_cubes_is_flagged() {
        let user = member(OnboardingStatus::AwaitingRevisionCall);
        assert!(!validate(&user).is_valid);
    }

    #[test]
    fn stale_masterclass_stage_is_flagged() {
        let mut user = member(OnboardingStatus::AwaitingMasterclass);
        user.progress.watched_masterclass = true;
        assert!(!validate(&user).is_valid);
    }

    #[test]
    fn audit_is_idempotent() {
        let user = member(OnboardingStatus::Confirmed);
        assert_eq!(validate(&user), validate(&user));
    }
}
