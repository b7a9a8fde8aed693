//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing callers.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Id, Project, ProjectSkillRow, Skill},
};

/// Repository for Project operations.
pub trait ProjectRepository {
    /// List every (project, skill) pair, ordered by project name and then
    /// by skill name. Projects without skills are left out.
    fn list_with_skills(&self) -> impl Future<Output = DbResult<Vec<ProjectSkillRow>>> + Send;

    /// Get a project by ID, `None` if it does not exist.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Option<Project>>> + Send;

    /// Create a project with only a name and a link. Returns the new ID.
    fn create(&self, name: &str, link: &str) -> impl Future<Output = DbResult<Id>> + Send;

    /// Set name and link of a project. Does nothing if the ID is unknown.
    fn update(&self, id: &str, name: &str, link: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a project by ID. Links to it are kept.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Skill operations.
pub trait SkillRepository {
    /// Get all skills ordered by icon.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Skill>>> + Send;

    /// Get a skill by ID, `None` if it does not exist.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Option<Skill>>> + Send;

    /// Create a skill. The icon is stored lower-cased. Returns the new ID.
    fn create(&self, name: &str, icon: &str) -> impl Future<Output = DbResult<Id>> + Send;

    /// Set name and icon of a skill. Does nothing if the ID is unknown.
    fn update(&self, id: &str, name: &str, icon: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a skill by ID. Links to it are kept.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Projects<'a>: ProjectRepository
    where
        Self: 'a;
    type Skills<'a>: SkillRepository
    where
        Self: 'a;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;

    /// Get the skill repository.
    fn skills(&self) -> Self::Skills<'_>;

    /// Release the underlying connection pool.
    fn close(self) -> impl Future<Output = ()> + Send
    where
        Self: Sized;
}
