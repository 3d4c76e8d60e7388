//! Configuration management for the countdown widget
//!
//! - **settings**: the persisted `{title, target_date}` record and its JSON store

pub mod settings;

// Re-export commonly used types
pub use settings::{CountdownConfig, LoadedSettings, SettingsStore, StartupConfig};
