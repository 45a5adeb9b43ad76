//! Repository traits for settings.

use crate::errors::Result;
use crate::settings::{TrackerSettings, TrackerSettingsUpdate};

/// Repository trait for persisted tracker settings.
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get all settings, with defaults for anything not stored.
    fn get_settings(&self) -> Result<TrackerSettings>;

    /// Update multiple settings at once.
    fn update_settings(&self, update: &TrackerSettingsUpdate) -> Result<()>;

    /// Get a single raw setting value by key.
    fn get_setting(&self, setting_key: &str) -> Result<String>;
}
