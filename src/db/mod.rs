//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (MongoDB, SQLite) to be swapped
//! without changing callers.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain records (Project, Skill, ProjectSkillLink)
//! - `repository`: Trait definitions for data access
//! - `config`: Environment-sourced connection settings
//! - `mongo`: MongoDB implementation (aggregation pipeline join)
//! - `sqlite`: SQLite implementation (join merged in application code)

mod config;
mod error;
mod models;
mod repository;
pub mod mongo;
pub mod sqlite;
pub mod utils;

#[cfg(test)]
mod models_test;

pub use config::{DEFAULT_APP_NAME, DEFAULT_DATABASE, DbConfig, DbCredentials};
pub use error::{DbError, DbResult};
pub use models::*;
pub use mongo::MongoDatabase;
pub use repository::*;
pub use sqlite::SqliteDatabase;
