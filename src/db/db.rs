//! SQLite connection setup.
//!
//! Opening a database always brings its schema up to date through
//! [`MigrationManager`], so callers never see a partially migrated file.

use crate::db::migrations::MigrationManager;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// File name of the database inside the data directory.
pub const DB_FILE_NAME: &str = "shiftlog.db";

/// An open, migrated database.
pub struct Db {
    /// The underlying connection; stores wrap it as they need.
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the application data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens (or creates) the database at `path` and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        MigrationManager::new().run_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
