//! # Shiftlog - shift planning and worked-time tracking
//!
//! A command-line utility for planning work shifts, tracking them from
//! planned through running to finished, and reporting worked hours.
//!
//! ## Features
//!
//! - **Shift Lifecycle**: Plan, start, finish, correct and delete shifts
//! - **Auto Start**: Planned shifts start on their own once their time arrives
//! - **Time Accounting**: Worked minutes net of pauses, live progress while running
//! - **Aggregation**: Daily, weekly and monthly totals and a month calendar
//! - **Data Export**: Export shifts as JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
