//! `chapterflow-members` — the membership domain model.
//!
//! Roles, chapters, members and outreach events, plus the read-only directory
//! traits the decision engines consume. This crate is intentionally decoupled
//! from storage and transport.

pub mod chapter;
pub mod directory;
pub mod event;
pub mod role;
pub mod user;

pub use chapter::{Chapter, ChapterName, CountryName};
pub use directory::{ChapterDirectory, InMemoryDirectory, UserDirectory};
pub use event::CubeEvent;
pub use role::Role;
pub use user::{OnboardingProgress, OnboardingStatus, User, UserStats};
