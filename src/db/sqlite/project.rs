//! SQLite ProjectRepository implementation.

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};
use tracing::instrument;

use super::helpers::{link_from_row, merge_project_skills, project_from_row, skill_from_row};
use crate::db::utils::{generate_entity_id, parse_id};
use crate::db::{DbResult, Id, Project, ProjectRepository, ProjectSkillLink, ProjectSkillRow, Skill};

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    /// SQLite has no aggregation pipeline, so the join runs as three plain
    /// queries (projects, links, linked skills) merged in memory.
    #[instrument(skip(self))]
    async fn list_with_skills(&self) -> DbResult<Vec<ProjectSkillRow>> {
        let projects: Vec<(Id, String)> =
            sqlx::query("SELECT id, name FROM projects ORDER BY name ASC, id ASC")
                .fetch_all(self.pool)
                .await?
                .into_iter()
                .map(|row| (row.get("id"), row.get("name")))
                .collect();

        if projects.is_empty() {
            return Ok(vec![]);
        }

        let links: Vec<ProjectSkillLink> =
            sqlx::query("SELECT id, project_id, skill_id FROM project_skills ORDER BY rowid")
                .fetch_all(self.pool)
                .await?
                .iter()
                .map(link_from_row)
                .collect();

        let skills: HashMap<Id, Skill> = sqlx::query(
            "SELECT id, name, icon FROM skills \
             WHERE id IN (SELECT skill_id FROM project_skills)",
        )
        .fetch_all(self.pool)
        .await?
        .iter()
        .map(skill_from_row)
        .map(|skill| (skill.id.clone(), skill))
        .collect();

        Ok(merge_project_skills(&projects, &links, &skills))
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> DbResult<Option<Project>> {
        let id = parse_id(id)?.to_hex();

        let row = sqlx::query(
            "SELECT id, name, thumbnail, link, description FROM projects WHERE id = ?",
        )
        .bind(&id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.as_ref().map(project_from_row))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, link: &str) -> DbResult<Id> {
        let id = generate_entity_id();

        sqlx::query("INSERT INTO projects (id, name, link) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(name)
            .bind(link)
            .execute(self.pool)
            .await?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: &str, name: &str, link: &str) -> DbResult<()> {
        let id = parse_id(id)?.to_hex();

        sqlx::query("UPDATE projects SET name = ?, link = ? WHERE id = ?")
            .bind(name)
            .bind(link)
            .bind(&id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> DbResult<()> {
        let id = parse_id(id)?.to_hex();

        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(&id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
