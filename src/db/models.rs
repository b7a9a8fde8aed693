//! Domain models for the portfolio database.
//!
//! These models are storage-agnostic and represent the records the
//! repositories read and write. Backends map them to their own row or
//! document shapes.

use serde::{Deserialize, Serialize};

/// 24-character hex ID type used for all records.
pub type Id = String;

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    pub thumbnail: Option<String>,
    pub link: String,
    pub description: Option<String>,
}

/// A skill shown on the portfolio. `icon` is always stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Id,
    pub name: String,
    pub icon: String,
}

/// Join record associating one project with one skill.
///
/// Neither side is checked for existence, so a link may reference a
/// project or skill that has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSkillLink {
    pub id: Id,
    pub project_id: Id,
    pub skill_id: Id,
}

/// One row of the project/skill join: a skill together with the project
/// it was reached from.
///
/// A project linked to N skills yields N rows; a project with no skills
/// yields none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSkillRow {
    pub project_id: Id,
    pub project_name: String,
    pub skill: Skill,
}
