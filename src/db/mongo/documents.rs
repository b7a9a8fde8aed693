//! BSON document shapes for the MongoDB collections.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

use crate::db::{Project, ProjectSkillRow, Skill};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, T, D>(de: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// A document in `projects`. Unset optional fields are omitted, not stored as null.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProjectDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A document in `skills`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SkillDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

/// Output document of the project/skill aggregation.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectSkillRowDocument {
    pub project_id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_name: String,
    pub skill: SkillDocument,
}

impl From<ProjectDocument> for Project {
    fn from(doc: ProjectDocument) -> Self {
        Project {
            id: doc.id.to_hex(),
            name: doc.name,
            thumbnail: doc.thumbnail,
            link: doc.link,
            description: doc.description,
        }
    }
}

impl From<SkillDocument> for Skill {
    fn from(doc: SkillDocument) -> Self {
        Skill {
            id: doc.id.to_hex(),
            name: doc.name,
            icon: doc.icon,
        }
    }
}

impl From<ProjectSkillRowDocument> for ProjectSkillRow {
    fn from(doc: ProjectSkillRowDocument) -> Self {
        ProjectSkillRow {
            project_id: doc.project_id.to_hex(),
            project_name: doc.project_name,
            skill: doc.skill.into(),
        }
    }
}
