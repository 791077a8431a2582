//! Local persistence for client-side settings

pub mod settings;

pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore};
