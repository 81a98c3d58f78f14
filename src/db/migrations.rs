//! Versioned schema migrations.
//!
//! Applied migrations are recorded in the `migrations` table. Pending ones
//! run in version order inside a single transaction, so a failed migration
//! leaves the schema at its previous version.
//!
//! ```rust,no_run
//! use shiftlog::db::migrations::MigrationManager;
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("shiftlog.db")?;
//! MigrationManager::new().run_migrations(&mut conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: shifts table keyed by the opaque shift id
        self.add_migration(1, "create_shifts", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS shifts (
                    id TEXT NOT NULL PRIMARY KEY,
                    owner_id TEXT NOT NULL,
                    start_time TEXT NOT NULL,
                    actual_start TEXT,
                    end_time TEXT,
                    pause_minutes INTEGER NOT NULL DEFAULT 0,
                    duration_minutes INTEGER,
                    status TEXT,
                    running INTEGER NOT NULL DEFAULT 0
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_shifts_owner_start ON shifts(owner_id, start_time)", [])?;
            Ok(())
        });

        // Version 2: last write time, for inspecting sync behaviour
        self.add_migration(2, "add_shift_updated_at", |tx| {
            tx.execute("ALTER TABLE shifts ADD COLUMN updated_at TIMESTAMP", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;

        msg_debug!(Message::AllMigrationsCompleted);
        Ok(())
    }

    pub fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .optional()?
            .flatten();

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.iter().map(|m| m.version).max().unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}
