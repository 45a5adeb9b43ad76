use super::SettingsRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};
use crate::settings::{PacingPolicy, TrackerSettings, TrackerSettingsUpdate};
use crate::utils::time_utils::parse_timezone;
use log::debug;
use std::sync::Arc;

pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<TrackerSettings>;

    fn update_settings(&self, update: &TrackerSettingsUpdate) -> Result<()>;

    fn get_pacing_policy(&self) -> Result<PacingPolicy>;

    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<TrackerSettings> {
        self.settings_repository.get_settings()
    }

    fn update_settings(&self, update: &TrackerSettingsUpdate) -> Result<()> {
        if let Some(ref timezone) = update.timezone {
            parse_timezone(timezone)?;
        }
        if let Some(ref symbol) = update.currency_symbol {
            if symbol.trim().is_empty() {
                return Err(Error::InvalidConfigValue(
                    "currency symbol cannot be blank".to_string(),
                ));
            }
        }

        debug!("Updating tracker settings: {:?}", update);
        self.settings_repository.update_settings(update)
    }

    fn get_pacing_policy(&self) -> Result<PacingPolicy> {
        match self.settings_repository.get_setting(super::PACING_POLICY_KEY) {
            Ok(value) => Ok(value.parse().unwrap_or_default()),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(PacingPolicy::default()),
            Err(e) => Err(e),
        }
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
