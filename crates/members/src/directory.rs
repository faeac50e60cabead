//! Directory traits: the engines' read-only view of stored members/chapters.
//!
//! Injected explicitly (constructor/call parameters) so decisions are
//! deterministic under test — the engines never reach into ambient state.
//! Lookups return owned snapshots: each command evaluates against a
//! consistent copy and produces a fully-formed next state; serializing
//! writes per user id is the store's concern.

use std::collections::HashMap;
use std::sync::Mutex;

use chapterflow_core::UserId;

use crate::chapter::{Chapter, ChapterName};
use crate::role::Role;
use crate::user::User;

/// Read-only member lookup.
pub trait UserDirectory {
    fn get(&self, id: UserId) -> Option<User>;

    /// All members currently holding `role`. Used for notification routing.
    fn with_role(&self, role: Role) -> Vec<User>;
}

/// Read-only chapter lookup.
pub trait ChapterDirectory {
    fn get(&self, name: &ChapterName) -> Option<Chapter>;

    fn list_all(&self) -> Vec<Chapter>;
}

/// In-memory directory for tests and dev fixtures.
///
/// Interior mutability keeps the trait surface read-only while fixtures can
/// still be built up incrementally.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: Mutex<HashMap<UserId, User>>,
    chapters: Mutex<Vec<Chapter>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a member snapshot.
    pub fn put_user(&self, user: User) {
        if let Ok(mut users) = self.users.lock() {
            users.insert(user.id, user);
        }
    }

    pub fn put_chapter(&self, chapter: Chapter) {
        if let Ok(mut chapters) = self.chapters.lock() {
            chapters.retain(|c| c.name != chapter.name);
            chapters.push(chapter);
        }
    }
}

impl UserDirectory for InMemoryDirectory {
    fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().ok()?.get(&id).cloned()
    }

    fn with_role(&self, role: Role) -> Vec<User> {
        match self.users.lock() {
            Ok(users) => users.values().filter(|u| u.role == role).cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl ChapterDirectory for InMemoryDirectory {
    fn get(&self, name: &ChapterName) -> Option<Chapter> {
        self.chapters
            .lock()
            .ok()?
            .iter()
            .find(|c| &c.name == name)
            .cloned()
    }

    fn list_all(&self) -> Vec<Chapter> {
        match self.chapters.lock() {
            Ok(chapters) => chapters.clone(),
            Err(_) => Vec::new(),
        }
    }
}
