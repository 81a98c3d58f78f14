//! Error types for the shift lifecycle engine.
//!
//! Every engine operation returns [`ShiftResult`]. A rejected operation never
//! produces a partially updated shift or collection, so callers can retry with
//! corrected input.

use crate::libs::shift::ShiftStatus;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShiftError {
    /// Malformed or logically impossible timestamps or pauses.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested state change is not legal from the current state.
    #[error("Cannot {action} a shift that is {from}")]
    InvalidTransition { action: &'static str, from: ShiftStatus },

    #[error("Shift not found: {0}")]
    NotFound(String),

    #[error("Failed to load shifts: {0}")]
    Load(String),

    #[error("Failed to save shifts: {0}")]
    Save(String),

    #[error("Failed to delete shift: {0}")]
    Delete(String),
}

pub type ShiftResult<T> = Result<T, ShiftError>;
