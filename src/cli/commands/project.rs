use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, or_dash, truncate_with_ellipsis};
use crate::db::{Database, Project, ProjectRepository, ProjectSkillRow};

#[derive(Tabled)]
struct ProjectSkillDisplay {
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Skill")]
    skill: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Project ID")]
    project_id: String,
}

impl From<&ProjectSkillRow> for ProjectSkillDisplay {
    fn from(row: &ProjectSkillRow) -> Self {
        Self {
            project: truncate_with_ellipsis(&row.project_name, 40),
            skill: truncate_with_ellipsis(&row.skill.name, 30),
            icon: row.skill.icon.clone(),
            project_id: row.project_id.clone(),
        }
    }
}

/// List every project/skill pair
pub async fn list_projects<D: Database>(db: &D, format: &str) -> CliResult<String> {
    let rows = db.projects().list_with_skills().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&rows)?),
        _ => Ok(format_table(&rows)),
    }
}

fn format_table(rows: &[ProjectSkillRow]) -> String {
    if rows.is_empty() {
        return "No projects with skills found.".to_string();
    }

    let display: Vec<ProjectSkillDisplay> = rows.iter().map(|r| r.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// Get a single project by ID
pub async fn get_project<D: Database>(db: &D, id: &str, format: &str) -> CliResult<String> {
    let project = db
        .projects()
        .get(id)
        .await?
        .ok_or_else(|| CliError::NotFound {
            entity: "Project",
            id: id.to_string(),
        })?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&project)?),
        _ => Ok(format_project_detail(&project)),
    }
}

fn format_project_detail(project: &Project) -> String {
    use tabled::builder::Builder;

    let mut builder = Builder::default();

    builder.push_record(["Project ID", &project.id]);
    builder.push_record(["Name", &project.name]);
    builder.push_record(["Link", &project.link]);
    builder.push_record(["Thumbnail", &or_dash(project.thumbnail.as_deref())]);
    builder.push_record(["Description", &or_dash(project.description.as_deref())]);

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

/// Create a project
pub async fn create_project<D: Database>(db: &D, name: &str, link: &str) -> CliResult<String> {
    let id = db.projects().create(name, link).await?;
    Ok(format!("Created project: {}", id))
}

/// Update a project's name and link
pub async fn update_project<D: Database>(
    db: &D,
    id: &str,
    name: &str,
    link: &str,
) -> CliResult<String> {
    db.projects().update(id, name, link).await?;
    Ok(format!("Updated project: {}", id))
}

/// Delete a project
pub async fn delete_project<D: Database>(db: &D, id: &str, force: bool) -> CliResult<String> {
    // Safety check: require --force flag
    if !force {
        return Err(CliError::ForceRequired);
    }

    db.projects().delete(id).await?;
    Ok(format!("Deleted project: {}", id))
}
