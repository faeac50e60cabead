//! `chapterflow-onboarding` — the onboarding lifecycle state machine.
//!
//! Validated status transitions over a static table, auto-advance driven by
//! progress facts, and stage notifications. Commands read a member snapshot
//! and return either a structured error or the fully-formed next state —
//! nothing is clamped or auto-corrected.

pub mod audit;
pub mod engine;
pub mod error;
pub mod registration;
pub mod transitions;

pub use audit::{validate, OnboardingAudit};
pub use engine::OnboardingEngine;
pub use error::TransitionError;
pub use registration::ApplicationForm;
pub use transitions::{allowed_targets, is_valid_transition};
