//! Scope resolution: does an actor's administrative scope cover a target?
//!
//! One shared component for all rules. Regional scope is a managed country
//! resolved through the chapter list; chapter scope is the actor's organised
//! chapter set; GlobalAdmin and above cover everything.

use std::collections::HashSet;

use chapterflow_members::{Chapter, ChapterName, CountryName, CubeEvent, Role, User};

/// Countries the given chapter memberships resolve to.
fn countries_of<'a>(
    memberships: &[ChapterName],
    all_chapters: &'a [Chapter],
) -> HashSet<&'a CountryName> {
    all_chapters
        .iter()
        .filter(|c| memberships.contains(&c.name))
        .map(|c| &c.country)
        .collect()
}

/// Chapter-rank coverage: the actor organises at least one of the target's
/// chapters.
pub(crate) fn chapter_scope_covers(actor: &User, target: &User) -> bool {
    target.chapters.iter().any(|c| actor.organises(c))
}

/// Hierarchy-guarded self-vs-target coverage.
///
/// The hierarchy gate is strict: an equal or higher-ranked target is never
/// manageable, even by a GlobalAdmin acting on another GlobalAdmin.
pub fn manages_member(actor: &User, target: &User, all_chapters: Option<&[Chapter]>) -> bool {
    if !actor.role.outranks(target.role) {
        return false;
    }

    match actor.role {
        Role::RegionalOrganiser => {
            let Some(country) = actor.managed_country.as_ref() else {
                return false;
            };
            let Some(all_chapters) = all_chapters else {
                return false;
            };
            countries_of(&target.chapters, all_chapters).contains(country)
        }
        Role::ChapterOrganiser => chapter_scope_covers(actor, target),
        // Outranking is all GlobalAdmin/GodMode need; lower roles never reach
        // here because the coarse gate grants them nothing.
        _ => true,
    }
}

/// Entity-scoped coverage for operational actions on an event.
pub fn manages_event(actor: &User, event: &CubeEvent, all_chapters: Option<&[Chapter]>) -> bool {
    if actor.id == event.organiser {
        return true;
    }

    if actor.role == Role::ChapterOrganiser && actor.organises(&event.city) {
        return true;
    }

    if actor.role.at_least(Role::RegionalOrganiser) {
        let Some(chapter) = all_chapters.and_then(|all| all.iter().find(|c| c.name == event.city))
        else {
            return false;
        };
        return match actor.role {
            Role::RegionalOrganiser => actor.managed_country.as_ref() == Some(&chapter.country),
            _ => true,
        };
    }

    false
}

/// Coverage for actions on a chapter itself.
pub fn manages_chapter(
    actor: &User,
    name: &ChapterName,
    all_chapters: Option<&[Chapter]>,
) -> bool {
    let Some(chapter) = all_chapters.and_then(|all| all.iter().find(|c| &c.name == name)) else {
        return false;
    };

    match actor.role {
        Role::RegionalOrganiser => actor.managed_country.as_ref() == Some(&chapter.country),
        Role::ChapterOrganiser => actor.organises(name),
        _ => actor.role.at_least(Role::GlobalAdmin),
    }
}
