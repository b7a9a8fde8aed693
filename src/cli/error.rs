use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("{entity} not found: {id}")]
    #[diagnostic(code(portfolio::cli::not_found))]
    NotFound { entity: &'static str, id: String },

    #[error("Delete operation requires --force flag")]
    #[diagnostic(
        code(portfolio::cli::force_required),
        help("This action is destructive and cannot be undone. Re-run with --force.")
    )]
    ForceRequired,

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(portfolio::cli::serialization))]
    Serialization(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
