//! Shared helper functions for SQLite repositories.

use std::collections::HashMap;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{DbError, Id, Project, ProjectSkillLink, ProjectSkillRow, Skill};

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        DbError::Database {
            message: e.to_string(),
        }
    }
}

pub fn project_from_row(row: &SqliteRow) -> Project {
    Project {
        id: row.get("id"),
        name: row.get("name"),
        thumbnail: row.get("thumbnail"),
        link: row.get("link"),
        description: row.get("description"),
    }
}

pub fn skill_from_row(row: &SqliteRow) -> Skill {
    Skill {
        id: row.get("id"),
        name: row.get("name"),
        icon: row.get("icon"),
    }
}

pub fn link_from_row(row: &SqliteRow) -> ProjectSkillLink {
    ProjectSkillLink {
        id: row.get("id"),
        project_id: row.get("project_id"),
        skill_id: row.get("skill_id"),
    }
}

/// Join projects to their skills in memory.
///
/// `projects` must already be in output order (by name). Each project
/// contributes one row per linked skill, skills ordered by name; projects
/// with no resolvable skill contribute nothing. Links pointing at a missing
/// skill are skipped.
pub fn merge_project_skills(
    projects: &[(Id, String)],
    links: &[ProjectSkillLink],
    skills: &HashMap<Id, Skill>,
) -> Vec<ProjectSkillRow> {
    let mut by_project: HashMap<&str, Vec<&Skill>> = HashMap::new();
    for link in links {
        if let Some(skill) = skills.get(&link.skill_id) {
            by_project
                .entry(link.project_id.as_str())
                .or_default()
                .push(skill);
        }
    }

    let mut rows = Vec::new();
    for (project_id, project_name) in projects {
        let Some(mut project_skills) = by_project.remove(project_id.as_str()) else {
            continue;
        };
        project_skills.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        rows.extend(project_skills.into_iter().map(|skill| ProjectSkillRow {
            project_id: project_id.clone(),
            project_name: project_name.clone(),
            skill: skill.clone(),
        }));
    }
    rows
}
