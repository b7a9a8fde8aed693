//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic; each backend converts its
//! driver errors into these variants without retrying or swallowing them.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Invalid data: {message} (hint: {help})")]
    #[diagnostic(code(portfolio::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(portfolio::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(portfolio::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(portfolio::db::connection_error),
        help("Check DBHOST, DBUSER and DBPWD (or DBURI) and that the server is reachable.")
    )]
    Connection { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(portfolio::db::configuration_error))]
    Configuration { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
