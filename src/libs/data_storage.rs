//! Location of the application's files.
//!
//! The database and `config.json` live in a per-user data directory:
//!
//! - Windows: `%LOCALAPPDATA%\\shiftlog`
//! - macOS: `~/Library/Application Support/shiftlog`
//! - other: `~/.local/share/shiftlog`
//!
//! The directory is created on first use.

use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory name under the platform data directory.
pub const APP_NAME: &str = "shiftlog";

/// Resolves files inside the platform-specific application data directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    /// Directory all files are resolved against.
    base_path: PathBuf,
}

impl DataStorage {
    /// Storage in the platform data directory. Falls back to the current
    /// directory when `HOME` or `LOCALAPPDATA` is unset.
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    /// Storage rooted at an explicit directory.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Path of `file_name` inside the storage directory, creating the
    /// directory if needed.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
