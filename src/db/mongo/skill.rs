//! MongoDB SkillRepository implementation.

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tracing::instrument;

use super::SKILLS;
use super::documents::SkillDocument;
use crate::db::utils::{normalize_icon, parse_id};
use crate::db::{DbResult, Id, Skill, SkillRepository};

/// Driver-backed skill repository.
pub struct MongoSkillRepository<'a> {
    pub(crate) db: &'a mongodb::Database,
}

impl MongoSkillRepository<'_> {
    fn collection(&self) -> Collection<SkillDocument> {
        self.db.collection(SKILLS)
    }
}

impl SkillRepository for MongoSkillRepository<'_> {
    #[instrument(skip(self))]
    async fn list(&self) -> DbResult<Vec<Skill>> {
        let documents: Vec<SkillDocument> = self
            .collection()
            .find(doc! {})
            .sort(doc! { "icon": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> DbResult<Option<Skill>> {
        let oid = parse_id(id)?;
        let found = self.collection().find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Skill::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, icon: &str) -> DbResult<Id> {
        let document = SkillDocument {
            id: ObjectId::new(),
            name: name.to_string(),
            icon: normalize_icon(icon),
        };
        self.collection().insert_one(&document).await?;
        Ok(document.id.to_hex())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: &str, name: &str, icon: &str) -> DbResult<()> {
        let oid = parse_id(id)?;
        self.collection()
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "name": name, "icon": normalize_icon(icon) } },
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> DbResult<()> {
        let oid = parse_id(id)?;
        self.collection().delete_one(doc! { "_id": oid }).await?;
        Ok(())
    }
}
