//! Database utility functions.

use mongodb::bson::oid::ObjectId;

use crate::db::{DbError, DbResult, Id};

/// Generate a new record ID.
///
/// Every backend uses the ObjectId hex form so IDs stay interchangeable
/// between a MongoDB deployment and a local SQLite file.
pub fn generate_entity_id() -> Id {
    ObjectId::new().to_hex()
}

/// Parse a record ID, rejecting anything that is not a 24-character hex ObjectId.
pub fn parse_id(id: &str) -> DbResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| DbError::InvalidData {
        message: format!("'{}' is not a valid id: {}", id, e),
        help: "Ids are 24 hexadecimal characters".to_string(),
    })
}

/// Skill icons are stored lower-cased regardless of input case.
pub fn normalize_icon(icon: &str) -> String {
    icon.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_parse_back() {
        let id = generate_entity_id();
        assert_eq!(id.len(), 24);
        assert_eq!(parse_id(&id).unwrap().to_hex(), id);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(generate_entity_id(), generate_entity_id());
    }

    #[test]
    fn parse_id_rejects_malformed_input() {
        for bad in ["", "abc", "zzzzzzzzzzzzzzzzzzzzzzzz", "65a1f0c2e4b0a1b2c3d4e5f"] {
            let err = parse_id(bad).unwrap_err();
            assert!(matches!(err, DbError::InvalidData { .. }), "{bad:?}");
        }
    }

    #[test]
    fn normalize_icon_lowercases() {
        assert_eq!(normalize_icon("JS"), "js");
        assert_eq!(normalize_icon("TypeScript"), "typescript");
        assert_eq!(normalize_icon("rust"), "rust");
    }
}
