use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use crate::db::{Database, Skill, SkillRepository};

#[derive(Tabled)]
pub(crate) struct SkillDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Icon")]
    pub(crate) icon: String,
}

impl From<&Skill> for SkillDisplay {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id.clone(),
            name: truncate_with_ellipsis(&skill.name, 50),
            icon: skill.icon.clone(),
        }
    }
}

/// List skills ordered by icon
pub async fn list_skills<D: Database>(db: &D, format: &str) -> CliResult<String> {
    let skills = db.skills().list().await?;

    if format == "json" {
        Ok(serde_json::to_string_pretty(&skills)?)
    } else if skills.is_empty() {
        Ok("No skills found.".to_string())
    } else {
        let display: Vec<SkillDisplay> = skills.iter().map(SkillDisplay::from).collect();
        let mut table = Table::new(display);
        apply_table_style(&mut table);
        Ok(format!("{}", table))
    }
}

/// Get a skill by ID
pub async fn get_skill<D: Database>(db: &D, id: &str, format: &str) -> CliResult<String> {
    let skill = db
        .skills()
        .get(id)
        .await?
        .ok_or_else(|| CliError::NotFound {
            entity: "Skill",
            id: id.to_string(),
        })?;

    if format == "json" {
        Ok(serde_json::to_string_pretty(&skill)?)
    } else {
        Ok(format!(
            "ID: {}\nName: {}\nIcon: {}",
            skill.id, skill.name, skill.icon
        ))
    }
}

/// Create a skill
pub async fn create_skill<D: Database>(db: &D, name: &str, icon: &str) -> CliResult<String> {
    let id = db.skills().create(name, icon).await?;
    Ok(format!("Created skill: {}", id))
}

/// Update a skill's name and icon
pub async fn update_skill<D: Database>(
    db: &D,
    id: &str,
    name: &str,
    icon: &str,
) -> CliResult<String> {
    db.skills().update(id, name, icon).await?;
    Ok(format!("Updated skill: {}", id))
}

/// Delete a skill
pub async fn delete_skill<D: Database>(db: &D, id: &str, force: bool) -> CliResult<String> {
    // Safety check: require --force flag
    if !force {
        return Err(CliError::ForceRequired);
    }

    db.skills().delete(id).await?;
    Ok(format!("Deleted skill: {}", id))
}
