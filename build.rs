//! Build script for embedded SQLite migrations.
//!
//! `sqlx::migrate!` embeds the files under `migrations/` at compile time,
//! so cargo has to be told to rebuild when they change.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
