//! Tests for SqliteSkillRepository.

use crate::db::utils::generate_entity_id;
use crate::db::{Database, DbError, SkillRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in_memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_create_lowercases_icon() {
    let db = setup_db().await;
    let skills = db.skills();

    let id = skills
        .create("Data Viz", "JS")
        .await
        .expect("Create should succeed");

    let retrieved = skills
        .get(&id)
        .await
        .expect("Get should succeed")
        .expect("Skill should exist");
    assert_eq!(retrieved.id, id);
    assert_eq!(retrieved.name, "Data Viz");
    assert_eq!(retrieved.icon, "js");
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_icon_is_stored_lowercased_for_any_case() {
    let db = setup_db().await;
    let skills = db.skills();

    for icon in ["html5", "HTML5", "Html5", "hTmL5"] {
        let id = skills.create("Markup", icon).await.unwrap();
        let stored: String = sqlx::query_scalar("SELECT icon FROM skills WHERE id = ?")
            .bind(&id)
            .fetch_one(db.pool())
            .await
            .expect("Query should succeed");
        assert_eq!(stored, "html5", "input {icon:?}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_get_nonexistent_returns_none() {
    let db = setup_db().await;
    let skills = db.skills();

    let result = skills
        .get(&generate_entity_id())
        .await
        .expect("Get should succeed");
    assert!(result.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_get_accepts_uppercase_hex_id() {
    let db = setup_db().await;
    let skills = db.skills();

    let id = skills.create("Rust", "rust").await.unwrap();
    let retrieved = skills.get(&id.to_uppercase()).await.unwrap();
    assert_eq!(retrieved.map(|s| s.id), Some(id));
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_malformed_id_is_invalid_data() {
    let db = setup_db().await;
    let skills = db.skills();

    assert!(matches!(
        skills.get("1234").await,
        Err(DbError::InvalidData { .. })
    ));
    assert!(matches!(
        skills.update("1234", "x", "y").await,
        Err(DbError::InvalidData { .. })
    ));
    assert!(matches!(
        skills.delete("1234").await,
        Err(DbError::InvalidData { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_list_orders_by_icon() {
    let db = setup_db().await;
    let skills = db.skills();

    let result = skills.list().await.expect("List should succeed");
    assert!(result.is_empty());

    skills.create("TypeScript", "TS").await.unwrap();
    skills.create("CSS", "css3").await.unwrap();
    skills.create("Rust", "rust").await.unwrap();
    skills.create("Angular", "angular").await.unwrap();

    let result = skills.list().await.expect("List should succeed");
    let icons: Vec<&str> = result.iter().map(|s| s.icon.as_str()).collect();
    assert_eq!(icons, vec!["angular", "css3", "rust", "ts"]);
    assert!(result.windows(2).all(|w| w[0].icon <= w[1].icon));
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_update_lowercases_icon() {
    let db = setup_db().await;
    let skills = db.skills();

    let id = skills.create("Original", "orig").await.unwrap();
    skills
        .update(&id, "Updated Name", "NEWICON")
        .await
        .expect("Update should succeed");

    let retrieved = skills.get(&id).await.unwrap().expect("Skill should exist");
    assert_eq!(retrieved.name, "Updated Name");
    assert_eq!(retrieved.icon, "newicon");
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_update_unknown_id_is_noop() {
    let db = setup_db().await;
    let skills = db.skills();

    skills
        .update(&generate_entity_id(), "Ghost", "ghost")
        .await
        .expect("Update of unknown id should succeed");

    assert!(skills.list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn skill_delete() {
    let db = setup_db().await;
    let skills = db.skills();

    let id = skills.create("To Delete", "del").await.unwrap();
    skills.delete(&id).await.expect("Delete should succeed");

    assert!(skills.get(&id).await.unwrap().is_none());

    skills
        .delete(&id)
        .await
        .expect("Deleting twice should still succeed");
}
