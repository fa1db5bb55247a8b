//! Slot model: the nine bindings plus window settings
//!
//! This is the single source of truth for everything the hotbar persists.
//! Every mutating call writes the full document back through the store.

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::document::is_valid_scale;
use crate::config::{AppBinding, ConfigStore, PersistedDocument, Settings, SettingsUpdate, SlotCollection};
use crate::constants::geometry::SLOT_COUNT;
use crate::desktop_entry::DesktopEntry;
use crate::types::Position;

#[derive(Debug, Error, PartialEq)]
pub enum SlotError {
    #[error("descriptor has no Exec entry")]
    MissingExec,

    #[error("slot {0} is empty")]
    EmptySlot(usize),

    #[error("scale {0} must be a positive number")]
    InvalidScale(f64),
}

pub struct SlotModel {
    document: PersistedDocument,
    store: ConfigStore,
}

impl SlotModel {
    /// Build the model from whatever the store holds
    pub fn load(store: ConfigStore) -> Self {
        let document = store.load();
        Self::new(document, store)
    }

    pub fn new(document: PersistedDocument, store: ConfigStore) -> Self {
        Self { document, store }
    }

    pub fn document(&self) -> &PersistedDocument {
        &self.document
    }

    pub fn settings(&self) -> &Settings {
        &self.document.settings
    }

    pub fn slots(&self) -> &SlotCollection {
        &self.document.slots
    }

    pub fn slot(&self, index: usize) -> Option<&AppBinding> {
        check_index(index);
        self.document.slots.get(index)
    }

    /// Bind a parsed descriptor to a slot
    ///
    /// Descriptors without an Exec line are rejected and the slot keeps its
    /// previous content.
    pub fn assign(&mut self, index: usize, entry: DesktopEntry, source_path: &Path) -> Result<(), SlotError> {
        check_index(index);
        let exec = entry.exec().ok_or(SlotError::MissingExec)?.to_string();

        let binding = AppBinding {
            name: entry.name.unwrap_or_default(),
            icon: entry.icon.unwrap_or_default(),
            exec,
            source_path: source_path.to_path_buf(),
        };
        info!(slot = index, name = %binding.name, path = %source_path.display(), "Assigned application to slot");
        self.document.slots.set(index, Some(binding));
        self.persist();
        Ok(())
    }

    pub fn clear(&mut self, index: usize) {
        check_index(index);
        info!(slot = index, "Cleared slot");
        self.document.slots.set(index, None);
        self.persist();
    }

    /// Change display name and icon of an occupied slot
    pub fn rename(&mut self, index: usize, name: String, icon: String) -> Result<(), SlotError> {
        check_index(index);
        let binding = self
            .document
            .slots
            .get_mut(index)
            .ok_or(SlotError::EmptySlot(index))?;
        binding.name = name;
        binding.icon = icon;
        info!(slot = index, name = %binding.name, icon = %binding.icon, "Edited slot");
        self.persist();
        Ok(())
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<(), SlotError> {
        if let Some(scale) = update.scale
            && !is_valid_scale(scale)
        {
            return Err(SlotError::InvalidScale(scale));
        }
        self.document.settings.apply(update);
        debug!(settings = ?self.document.settings, "Updated settings");
        self.persist();
        Ok(())
    }

    pub fn record_position(&mut self, position: Position) {
        self.document.settings.window_position = Some(position);
        debug!(x = position.x, y = position.y, "Recorded window position");
        self.persist();
    }

    /// Write the full document; failures are logged by the store
    pub fn persist(&self) {
        let _ = self.store.save(&self.document);
    }
}

/// Slot indices come from the layout; anything else is a bug
fn check_index(index: usize) {
    assert!(index < SLOT_COUNT, "slot index {index} out of range 0..{SLOT_COUNT}");
}
