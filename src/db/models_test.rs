//! Tests for domain models.

use crate::db::models::*;

#[test]
fn project_optional_fields_serialize_as_null() {
    let project = Project {
        id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
        name: "Portfolio Site".to_string(),
        thumbnail: None,
        link: "http://example.com".to_string(),
        description: None,
    };

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["thumbnail"], serde_json::Value::Null);
    assert_eq!(json["description"], serde_json::Value::Null);
    assert_eq!(json["link"], "http://example.com");
}

#[test]
fn project_skill_row_nests_the_skill() {
    let row = ProjectSkillRow {
        project_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
        project_name: "Portfolio Site".to_string(),
        skill: Skill {
            id: "65a1f0c2e4b0a1b2c3d4e5f7".to_string(),
            name: "Rust".to_string(),
            icon: "rust".to_string(),
        },
    };

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["project_name"], "Portfolio Site");
    assert_eq!(json["skill"]["icon"], "rust");

    let back: ProjectSkillRow = serde_json::from_value(json).unwrap();
    assert_eq!(back, row);
}
