//! Core library modules for shiftlog.
//!
//! ## Engine
//!
//! Pure, clock-free functions over shift collections:
//!
//! - **shift**: the `Shift` model, derived status, record normalization, input parsing
//! - **duration**: final and live worked minutes
//! - **lifecycle**: the planned → running → finished state machine, edit and remove
//! - **scheduler**: the auto-transition tick
//! - **summary**: day/week/month windows and aggregation
//!
//! ## Infrastructure
//!
//! - **config**, **data_storage**: JSON configuration in the data directory
//! - **messages**, **formatter**, **view**: console output
//!
//! ## Usage
//!
//! ```rust
//! use shiftlog::libs::{lifecycle, scheduler, shift::Shift, summary::{total_minutes, Window}};
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let shifts = vec![Shift::planned(day.and_hms_opt(8, 0, 0).unwrap())];
//!
//! let (shifts, _) = scheduler::advance(&shifts, day.and_hms_opt(8, 5, 0).unwrap());
//! let shifts = lifecycle::finish_by_id(&shifts, &shifts[0].id.clone(), day.and_hms_opt(16, 0, 0).unwrap(), 30)?;
//! assert_eq!(total_minutes(&shifts, &Window::week(day), day.and_hms_opt(18, 0, 0).unwrap()), 450);
//! # Ok::<(), shiftlog::libs::error::ShiftError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod formatter;
pub mod lifecycle;
pub mod messages;
pub mod scheduler;
pub mod shift;
pub mod summary;
pub mod view;
