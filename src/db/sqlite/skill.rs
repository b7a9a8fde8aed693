//! SQLite SkillRepository implementation.

use sqlx::SqlitePool;
use tracing::instrument;

use super::helpers::skill_from_row;
use crate::db::utils::{generate_entity_id, normalize_icon, parse_id};
use crate::db::{DbResult, Id, Skill, SkillRepository};

/// SQLx-backed skill repository.
pub struct SqliteSkillRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> SkillRepository for SqliteSkillRepository<'a> {
    #[instrument(skip(self))]
    async fn list(&self) -> DbResult<Vec<Skill>> {
        let rows = sqlx::query("SELECT id, name, icon FROM skills ORDER BY icon ASC, id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(skill_from_row).collect())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> DbResult<Option<Skill>> {
        let id = parse_id(id)?.to_hex();

        let row = sqlx::query("SELECT id, name, icon FROM skills WHERE id = ?")
            .bind(&id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(skill_from_row))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, icon: &str) -> DbResult<Id> {
        let id = generate_entity_id();

        sqlx::query("INSERT INTO skills (id, name, icon) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(name)
            .bind(normalize_icon(icon))
            .execute(self.pool)
            .await?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: &str, name: &str, icon: &str) -> DbResult<()> {
        let id = parse_id(id)?.to_hex();

        sqlx::query("UPDATE skills SET name = ?, icon = ? WHERE id = ?")
            .bind(name)
            .bind(normalize_icon(icon))
            .bind(&id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> DbResult<()> {
        let id = parse_id(id)?.to_hex();

        sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(&id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
