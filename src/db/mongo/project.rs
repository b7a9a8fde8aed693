//! MongoDB ProjectRepository implementation.

use futures_util::TryStreamExt;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use mongodb::Collection;
use tracing::instrument;

use super::documents::{ProjectDocument, ProjectSkillRowDocument};
use super::{PROJECT_SKILLS, PROJECTS, SKILLS};
use crate::db::utils::parse_id;
use crate::db::{DbError, DbResult, Id, Project, ProjectRepository, ProjectSkillRow};

/// Driver-backed project repository.
pub struct MongoProjectRepository<'a> {
    pub(crate) db: &'a mongodb::Database,
}

impl MongoProjectRepository<'_> {
    fn collection(&self) -> Collection<ProjectDocument> {
        self.db.collection(PROJECTS)
    }
}

/// Aggregation joining each project to its skills through `project_skills`.
///
/// The inner lookup replaces every link with the skill it points to, the
/// outer `$unwind` then emits one document per (project, skill) pair and
/// drops projects whose skill list is empty.
pub(crate) fn project_skills_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": PROJECT_SKILLS,
                "let": { "id": "$_id" },
                "pipeline": [
                    { "$match": { "$expr": { "$eq": ["$$id", "$projectId"] } } },
                    {
                        "$lookup": {
                            "from": SKILLS,
                            "let": { "skillId": "$skillId" },
                            "pipeline": [
                                { "$match": { "$expr": { "$eq": ["$_id", "$$skillId"] } } },
                            ],
                            "as": "skills",
                        }
                    },
                    { "$unwind": "$skills" },
                    { "$replaceRoot": { "newRoot": "$skills" } },
                    { "$sort": { "name": 1, "_id": 1 } },
                ],
                "as": "skills",
            }
        },
        doc! { "$unwind": "$skills" },
        doc! { "$sort": { "name": 1, "_id": 1, "skills.name": 1, "skills._id": 1 } },
        doc! {
            "$project": {
                "_id": 0,
                "project_id": "$_id",
                "project_name": "$name",
                "skill": "$skills",
            }
        },
    ]
}

impl ProjectRepository for MongoProjectRepository<'_> {
    #[instrument(skip(self))]
    async fn list_with_skills(&self) -> DbResult<Vec<ProjectSkillRow>> {
        let documents: Vec<Document> = self
            .collection()
            .aggregate(project_skills_pipeline())
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(|document| {
                bson::from_document::<ProjectSkillRowDocument>(document)
                    .map(ProjectSkillRow::from)
                    .map_err(|e| DbError::Database {
                        message: format!("Failed to decode project/skill row: {}", e),
                    })
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> DbResult<Option<Project>> {
        let oid = parse_id(id)?;
        let found = self.collection().find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Project::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, link: &str) -> DbResult<Id> {
        let document = ProjectDocument {
            id: ObjectId::new(),
            name: name.to_string(),
            thumbnail: None,
            link: link.to_string(),
            description: None,
        };
        self.collection().insert_one(&document).await?;
        Ok(document.id.to_hex())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: &str, name: &str, link: &str) -> DbResult<()> {
        let oid = parse_id(id)?;
        self.collection()
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "name": name, "link": link } },
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
