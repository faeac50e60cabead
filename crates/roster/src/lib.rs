//! `chapterflow-roster` — member administration at the command boundary.
//!
//! These commands are where the pure `can` checks and the membership model
//! meet: each one authorizes the actor, mutates a snapshot, emits the
//! notification records the member expects, and hands the next state back to
//! the caller for persistence.

pub mod commands;

pub use commands::RosterService;
