//! Role hierarchy: a strict total order over membership roles.

use serde::{Deserialize, Serialize};

/// Membership role, ordered by privilege.
///
/// Declaration order *is* the hierarchy: each variant strictly outranks every
/// variant before it. Comparisons via `level()` are the sole basis for
/// "higher/lower privilege" everywhere in the workspace.
///
/// # Invariants
/// - Exactly one hierarchy level per role.
/// - `GodMode` is the maximum and is never assignable by anyone except itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Applicant,
    Activist,
    ConfirmedActivist,
    ChapterOrganiser,
    RegionalOrganiser,
    GlobalAdmin,
    GodMode,
}

impl Role {
    /// Every role, lowest to highest.
    pub const ALL: [Role; 7] = [
        Role::Applicant,
        Role::Activist,
        Role::ConfirmedActivist,
        Role::ChapterOrganiser,
        Role::RegionalOrganiser,
        Role::GlobalAdmin,
        Role::GodMode,
    ];

    /// Hierarchy level. Higher outranks lower.
    pub fn level(self) -> u8 {
        match self {
            Role::Applicant => 0,
            Role::Activist => 1,
            Role::ConfirmedActivist => 2,
            Role::ChapterOrganiser => 3,
            Role::RegionalOrganiser => 4,
            Role::GlobalAdmin => 5,
            Role::GodMode => 6,
        }
    }

    /// Strictly outranks: `self` may manage members holding `other`.
    pub fn outranks(self, other: Role) -> bool {
        self.level() > other.level()
    }

    /// At-or-above check against a rank threshold.
    pub fn at_least(self, other: Role) -> bool {
        self.level() >= other.level()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Role::Applicant => "Applicant",
            Role::Activist => "Activist",
            Role::ConfirmedActivist => "Confirmed Activist",
            Role::ChapterOrganiser => "Chapter Organiser",
            Role::RegionalOrganiser => "Regional Organiser",
            Role::GlobalAdmin => "Global Admin",
            Role::GodMode => "Godmode",
        };
        f.write_str(name)
    }
}
