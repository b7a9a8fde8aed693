//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module. It backs local database files and
//! the in-memory database used by the test suite.

mod connection;
mod helpers;
mod project;
mod skill;

#[cfg(test)]
mod skill_test;

pub use connection::SqliteDatabase;
pub use project::SqliteProjectRepository;
pub use skill::SqliteSkillRepository;
