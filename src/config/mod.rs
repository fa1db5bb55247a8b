//! Configuration management for the hotbar
//!
//! - **document**: the persisted shape (settings + nine slots)
//! - **store**: JSON load/save at the per-user config path

pub mod document;
pub mod store;

// Re-export commonly used types
pub use document::{
    AppBinding, PersistedDocument, Settings, SettingsUpdate, SlotCollection, WindowLevel,
};
pub use store::ConfigStore;
