//! Database layer for shiftlog.
//!
//! SQLite-backed persistence for shift collections. The engine in `libs`
//! never touches the database; commands load a collection through
//! [`shifts::ShiftStore`], hand it to the engine, and save the result.
//!
//! ## Modules
//!
//! - **db**: opens the SQLite file in the data directory and migrates it.
//! - **migrations**: versioned schema changes, recorded in a `migrations` table.
//! - **shifts**: the [`shifts::ShiftStore`] trait and its SQLite implementation.
//!
//! ## Schema
//!
//! One `shifts` table keyed by the shift id. Timestamps are stored as local
//! `YYYY-MM-DDTHH:MM:SS` text; `status` and `running` are written for
//! readers of the raw table but the engine re-derives status on load.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::db::shifts::{ShiftStore, Shifts};
//!
//! let store = Shifts::new()?;
//! let shifts = store.load_shifts("local")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management; applies migrations on open.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// The shift store.
pub mod shifts;
