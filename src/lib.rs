//! Data access for a portfolio site: projects, skills and the links
//! between them, stored in MongoDB or SQLite.

pub mod cli;
pub mod db;
