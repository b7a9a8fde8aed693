//! MongoDB implementation of the database traits.
//!
//! Records live in three collections of one database; the project/skill
//! join runs server-side as a single aggregation pipeline.

mod connection;
mod documents;
mod project;
mod skill;

#[cfg(all(test, feature = "mongo-tests"))]
mod integration_test;

use mongodb::error::ErrorKind;

pub use connection::MongoDatabase;
pub use project::MongoProjectRepository;
pub use skill::MongoSkillRepository;

use crate::db::DbError;

/// Collection holding project records.
pub const PROJECTS: &str = "projects";
/// Collection holding project/skill link records.
pub const PROJECT_SKILLS: &str = "project_skills";
/// Collection holding skill records.
pub const SKILLS: &str = "skills";

impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Authentication { .. }
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::Io(_) => DbError::Connection {
                message: err.to_string(),
            },
            _ => DbError::Database {
                message: err.to_string(),
            },
        }
    }
}
