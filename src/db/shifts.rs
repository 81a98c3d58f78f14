//! SQLite persistence for shifts.
//!
//! [`ShiftStore`] is the boundary the rest of the application talks to;
//! [`Shifts`] implements it on the local database. Saves are upserts keyed by
//! the shift id and deletes are idempotent.
//!
//! Rows are read through [`ShiftRecord`] so a row with a malformed optional
//! field still loads, and a row without a readable start is skipped instead of
//! failing the whole load.
//!
//! ```rust,no_run
//! use shiftlog::db::shifts::{ShiftStore, Shifts};
//! use shiftlog::libs::shift::Shift;
//!
//! let store = Shifts::new()?;
//! let shift = Shift::create_planned("2024-01-01T08:00")?;
//! store.save_shifts("local", &[shift])?;
//! let shifts = store.load_shifts("local")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::error::{ShiftError, ShiftResult};
use crate::libs::shift::{Shift, ShiftRecord, ShiftStatus, TIMESTAMP_FORMAT};
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, Connection};
use serde_json::{Number, Value};
use std::path::Path;
use std::sync::Arc;

const SELECT_BY_OWNER: &str = "SELECT id, start_time, actual_start, end_time, pause_minutes, duration_minutes, status, running
    FROM shifts WHERE owner_id = ?1 ORDER BY start_time ASC";

const UPSERT_SHIFT: &str = "INSERT INTO shifts
    (id, owner_id, start_time, actual_start, end_time, pause_minutes, duration_minutes, status, running, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(id) DO UPDATE SET
        owner_id = excluded.owner_id,
        start_time = excluded.start_time,
        actual_start = excluded.actual_start,
        end_time = excluded.end_time,
        pause_minutes = excluded.pause_minutes,
        duration_minutes = excluded.duration_minutes,
        status = excluded.status,
        running = excluded.running,
        updated_at = excluded.updated_at";

const DELETE_SHIFT: &str = "DELETE FROM shifts WHERE id = ?1";

/// Persistence collaborator for shift collections.
pub trait ShiftStore {
    fn load_shifts(&self, owner_id: &str) -> ShiftResult<Vec<Shift>>;
    /// Upserts every shift, keyed by id.
    fn save_shifts(&self, owner_id: &str, shifts: &[Shift]) -> ShiftResult<()>;
    /// Deleting an unknown id succeeds.
    fn delete_shift(&self, id: &str) -> ShiftResult<()>;
}

#[derive(Clone)]
pub struct Shifts {
    pub conn: Arc<Mutex<Connection>>,
}

impl Shifts {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self::from_db(db))
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self::from_db(db))
    }

    fn from_db(db: Db) -> Self {
        Self {
            conn: Arc::new(Mutex::new(db.conn)),
        }
    }

    /// Reads the raw records of an owner without normalizing them.
    pub fn fetch_records(&self, owner_id: &str) -> rusqlite::Result<Vec<ShiftRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_BY_OWNER)?;
        let rows = stmt.query_map([owner_id], |row| {
            Ok(ShiftRecord {
                id: row.get(0)?,
                start: text(row.get(1)?),
                actual_start: text(row.get(2)?),
                end: text(row.get(3)?),
                pause_minutes: json(row.get(4)?),
                duration_minutes: json(row.get(5)?),
                status: text(row.get(6)?),
                running: flag(row.get(7)?),
            })
        })?;

        rows.collect()
    }
}

impl ShiftStore for Shifts {
    fn load_shifts(&self, owner_id: &str) -> ShiftResult<Vec<Shift>> {
        let records = self.fetch_records(owner_id).map_err(|e| ShiftError::Load(e.to_string()))?;
        let shifts: Vec<Shift> = records.iter().filter_map(ShiftRecord::normalize).collect();

        tracing::debug!(owner_id, loaded = shifts.len(), skipped = records.len() - shifts.len(), "shifts loaded");
        Ok(shifts)
    }

    fn save_shifts(&self, owner_id: &str, shifts: &[Shift]) -> ShiftResult<()> {
        let save = || -> rusqlite::Result<()> {
            let mut conn = self.conn.lock();
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare(UPSERT_SHIFT)?;
                for shift in shifts {
                    let status = shift.status();
                    stmt.execute(params![
                        shift.id,
                        owner_id,
                        shift.start.format(TIMESTAMP_FORMAT).to_string(),
                        shift.actual_start.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
                        shift.end.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
                        shift.pause_minutes,
                        shift.duration_minutes,
                        status.as_str(),
                        status == ShiftStatus::Running,
                    ])?;
                }
            }
            tx.commit()
        };

        save().map_err(|e| ShiftError::Save(e.to_string()))?;
        tracing::debug!(owner_id, saved = shifts.len(), "shifts saved");
        Ok(())
    }

    fn delete_shift(&self, id: &str) -> ShiftResult<()> {
        let deleted = self
            .conn
            .lock()
            .execute(DELETE_SHIFT, [id])
            .map_err(|e| ShiftError::Delete(e.to_string()))?;

        tracing::debug!(id, deleted, "shift delete");
        Ok(())
    }
}

fn text(value: SqlValue) -> Option<String> {
    match value {
        SqlValue::Text(text) => Some(text),
        _ => None,
    }
}

fn json(value: SqlValue) -> Option<Value> {
    match value {
        SqlValue::Integer(number) => Some(Value::from(number)),
        SqlValue::Real(number) => Number::from_f64(number).map(Value::Number),
        SqlValue::Text(text) => Some(Value::String(text)),
        SqlValue::Null | SqlValue::Blob(_) => None,
    }
}

fn flag(value: SqlValue) -> Option<bool> {
    match value {
        SqlValue::Integer(number) => Some(number != 0),
        _ => None,
    }
}
