//! Tests against a live MongoDB.
//!
//! Enabled with `--features mongo-tests`; reads `DBURI` (and optionally
//! `DBUSER`/`DBPWD`/`DBNAME`) like the CLI does. Every test wipes the three
//! collections first, so they run serially.

use mongodb::bson::{Document, doc, oid::ObjectId};
use serial_test::serial;

use super::{MongoDatabase, PROJECT_SKILLS, PROJECTS, SKILLS};
use crate::db::{Database, DbConfig, ProjectRepository, SkillRepository};

async fn setup_db() -> MongoDatabase {
    let config = DbConfig::from_env().expect("DBURI must be set for mongo-tests");
    let db = MongoDatabase::connect(&config)
        .await
        .expect("Failed to connect to MongoDB");
    for name in [PROJECTS, PROJECT_SKILLS, SKILLS] {
        db.database()
            .collection::<Document>(name)
            .delete_many(doc! {})
            .await
            .expect("Failed to clear collection");
    }
    db
}

async fn link(db: &MongoDatabase, project_id: &str, skill_id: &str) {
    db.database()
        .collection::<Document>(PROJECT_SKILLS)
        .insert_one(doc! {
            "projectId": ObjectId::parse_str(project_id).unwrap(),
            "skillId": ObjectId::parse_str(skill_id).unwrap(),
        })
        .await
        .expect("Insert link should succeed");
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn create_skill_lowercases_icon() {
    let db = setup_db().await;
    let skills = db.skills();

    let id = skills.create("Data Viz", "JS").await.unwrap();
    let skill = skills.get(&id).await.unwrap().expect("Skill should exist");
    assert_eq!(skill.icon, "js");
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn list_skills_orders_by_icon() {
    let db = setup_db().await;
    let skills = db.skills();

    skills.create("TypeScript", "TS").await.unwrap();
    skills.create("CSS", "css3").await.unwrap();
    skills.create("Angular", "angular").await.unwrap();

    let icons: Vec<String> = skills
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.icon)
        .collect();
    assert_eq!(icons, vec!["angular", "css3", "ts"]);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn create_delete_then_get_returns_none() {
    let db = setup_db().await;
    let projects = db.projects();

    let id = projects
        .create("Portfolio Site", "http://example.com")
        .await
        .unwrap();
    projects.delete(&id).await.unwrap();
    assert!(projects.get(&id).await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn update_leaves_description_untouched() {
    let db = setup_db().await;
    let projects = db.projects();

    let id = ObjectId::new();
    db.database()
        .collection::<Document>(PROJECTS)
        .insert_one(doc! {
            "_id": id,
            "name": "Original",
            "thumbnail": "thumb.png",
            "link": "http://old.example.com",
            "description": "Kept as is",
        })
        .await
        .unwrap();

    projects
        .update(&id.to_hex(), "Renamed", "http://new.example.com")
        .await
        .unwrap();

    let project = projects.get(&id.to_hex()).await.unwrap().unwrap();
    assert_eq!(project.name, "Renamed");
    assert_eq!(project.link, "http://new.example.com");
    assert_eq!(project.thumbnail.as_deref(), Some("thumb.png"));
    assert_eq!(project.description.as_deref(), Some("Kept as is"));
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn list_with_skills_flattens_and_orders_rows() {
    let db = setup_db().await;
    let projects = db.projects();
    let skills = db.skills();

    let zeta = projects.create("Zeta", "http://z.example.com").await.unwrap();
    let alpha = projects.create("Alpha", "http://a.example.com").await.unwrap();
    let lonely = projects.create("Lonely", "http://l.example.com").await.unwrap();

    let rust = skills.create("Rust", "rust").await.unwrap();
    let css = skills.create("CSS", "css3").await.unwrap();

    link(&db, &zeta, &rust).await;
    link(&db, &alpha, &rust).await;
    link(&db, &alpha, &css).await;

    let rows = projects.list_with_skills().await.unwrap();
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.project_name.as_str(), r.skill.name.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![("Alpha", "CSS"), ("Alpha", "Rust"), ("Zeta", "Rust")]
    );
    assert!(rows.iter().all(|r| r.project_id != lonely));
}
