mod commands;
pub mod error;
mod utils;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::error::CliResult;
use crate::db::{Database, DbConfig, MongoDatabase, SqliteDatabase};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(author, version, about = "Portfolio projects and skills", long_about = None)]
pub struct Cli {
    /// Use a local SQLite file instead of MongoDB (DBUSER/DBPWD/DBHOST or DBURI)
    #[arg(long, global = true)]
    pub sqlite: Option<PathBuf>,

    /// Output format (table or json)
    #[arg(long, global = true, default_value = "table")]
    pub format: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project commands
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Skill commands
    Skill {
        #[command(subcommand)]
        command: SkillCommands,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// List projects, one row per linked skill
    List,
    /// Show one project
    Get {
        /// Project ID
        id: String,
    },
    /// Create a project
    Create {
        /// Project name
        name: String,
        /// Project URL
        link: String,
    },
    /// Replace a project's name and link
    Update {
        /// Project ID
        id: String,
        /// New name
        name: String,
        /// New URL
        link: String,
    },
    /// Delete a project
    Delete {
        /// Project ID
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum SkillCommands {
    /// List skills ordered by icon
    List,
    /// Show one skill
    Get {
        /// Skill ID
        id: String,
    },
    /// Create a skill
    Create {
        /// Skill name
        name: String,
        /// Icon name (stored lower-case)
        icon: String,
    },
    /// Replace a skill's name and icon
    Update {
        /// Skill ID
        id: String,
        /// New name
        name: String,
        /// New icon name
        icon: String,
    },
    /// Delete a skill
    Delete {
        /// Skill ID
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}

/// Initialize tracing subscriber with env filter, logging to stderr
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Show help when no command provided
        let _ = Cli::parse_from(["portfolio", "--help"]);
        return Ok(());
    };

    init_tracing();

    let output = match cli.sqlite {
        Some(path) => {
            let db = SqliteDatabase::open(&path).await?;
            db.migrate().await?;
            let output = execute(&db, command, &cli.format).await;
            db.close().await;
            output
        }
        None => {
            let config = DbConfig::from_env()?;
            let db = MongoDatabase::connect(&config).await?;
            let output = execute(&db, command, &cli.format).await;
            db.close().await;
            output
        }
    }?;

    println!("{}", output);
    Ok(())
}

async fn execute<D: Database>(db: &D, command: Commands, format: &str) -> CliResult<String> {
    match command {
        Commands::Project { command } => match command {
            ProjectCommands::List => commands::project::list_projects(db, format).await,
            ProjectCommands::Get { id } => commands::project::get_project(db, &id, format).await,
            ProjectCommands::Create { name, link } => {
                commands::project::create_project(db, &name, &link).await
            }
            ProjectCommands::Update { id, name, link } => {
                commands::project::update_project(db, &id, &name, &link).await
            }
            ProjectCommands::Delete { id, force } => {
                commands::project::delete_project(db, &id, force).await
            }
        },
        Commands::Skill { command } => match command {
            SkillCommands::List => commands::skill::list_skills(db, format).await,
            SkillCommands::Get { id } => commands::skill::get_skill(db, &id, format).await,
            SkillCommands::Create { name, icon } => {
                commands::skill::create_skill(db, &name, &icon).await
            }
            SkillCommands::Update { id, name, icon } => {
                commands::skill::update_skill(db, &id, &name, &icon).await
            }
            SkillCommands::Delete { id, force } => {
                commands::skill::delete_skill(db, &id, force).await
            }
        },
    }
}
