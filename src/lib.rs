//! bibfinder library - race-day bib number lookup
//!
//! This library exposes the core functionality of bibfinder for testing purposes.

pub mod app;
pub mod config;
pub mod controller;
pub mod details;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod lookup;
pub mod notification;
pub mod participant;
pub mod runner_table;
pub mod scheduler;
pub mod scroll;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
