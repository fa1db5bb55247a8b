//! Minimal reader for `.desktop` application descriptors
//!
//! Only `Name`, `Icon` and `Exec` are picked up. Sections, comments,
//! localized keys and everything else are skipped without complaint.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::desktop::EXTENSION;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub exec: Option<String>,
}

impl DesktopEntry {
    /// Parse descriptor text; later duplicates overwrite earlier ones
    pub fn parse(content: &str) -> Self {
        let mut entry = DesktopEntry::default();
        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim() {
                "Name" => entry.name = Some(value),
                "Icon" => entry.icon = Some(value),
                "Exec" => entry.exec = Some(value),
                _ => {}
            }
        }
        entry
    }

    /// Read and parse a descriptor file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor {:?}", path))?;
        Ok(Self::parse(&content))
    }

    /// Exec line if present and not blank
    pub fn exec(&self) -> Option<&str> {
        self.exec.as_deref().filter(|exec| !exec.is_empty())
    }
}

/// Whether a dropped path looks like an application descriptor
pub fn is_descriptor_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == EXTENSION)
}
