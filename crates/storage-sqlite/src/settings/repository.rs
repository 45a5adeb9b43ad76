use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool};
use crate::errors::{write_failed, StorageError};
use crate::schema::app_settings::dsl::*;
use goalpace_core::errors::Result;
use goalpace_core::settings::{SettingsRepositoryTrait, TrackerSettings, TrackerSettingsUpdate};

pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SettingsRepository { pool }
    }
}

impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<TrackerSettings> {
        let mut conn = get_connection(&self.pool)?;
        let all_settings: Vec<(String, String)> = app_settings
            .select((setting_key, setting_value))
            .load::<(String, String)>(&mut conn)
            .map_err(StorageError::from)?;

        let mut settings = TrackerSettings::default();
        for (key, value) in all_settings {
            settings.apply_stored_value(&key, &value);
        }

        Ok(settings)
    }

    fn update_settings(&self, update: &TrackerSettingsUpdate) -> Result<()> {
        let rows: Vec<AppSettingDB> = update
            .stored_values()
            .into_iter()
            .map(|(key, value)| AppSettingDB {
                setting_key: key.to_string(),
                setting_value: value,
            })
            .collect();
        if rows.is_empty() {
            return Ok(());
        }

        let mut conn = get_connection(&self.pool).map_err(write_failed)?;
        conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
            for row in &rows {
                diesel::replace_into(app_settings).values(row).execute(conn)?;
            }
            Ok(())
        })
        .map_err(write_failed)?;

        debug!("Updated {} setting(s)", rows.len());
        Ok(())
    }

    fn get_setting(&self, setting_key_param: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        app_settings
            .filter(setting_key.eq(setting_key_param))
            .select(setting_value)
            .first(&mut conn)
            .map_err(|e| StorageError::from(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations};
    use goalpace_core::errors::{DatabaseError, Error};
    use goalpace_core::presentation::DisplayLocale;
    use goalpace_core::settings::{PacingPolicy, PACING_POLICY_KEY};
    use tempfile::tempdir;

    fn create_test_repository() -> (SettingsRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        (SettingsRepository::new(pool), temp_dir)
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let (repo, _dir) = create_test_repository();
        assert_eq!(repo.get_settings().unwrap(), TrackerSettings::default());
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let (repo, _dir) = create_test_repository();
        let err = repo.get_setting(PACING_POLICY_KEY).unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
    }

    #[test]
    fn test_update_then_read_back() {
        let (repo, _dir) = create_test_repository();
        repo.update_settings(&TrackerSettingsUpdate {
            pacing_policy: Some(PacingPolicy::TargetOnly),
            locale: Some(DisplayLocale::En),
            currency_symbol: Some("$".to_string()),
            timezone: None,
        })
        .unwrap();

        let settings = repo.get_settings().unwrap();
        assert_eq!(settings.pacing_policy, PacingPolicy::TargetOnly);
        assert_eq!(settings.locale, DisplayLocale::En);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.timezone, TrackerSettings::default().timezone);
        assert_eq!(repo.get_setting(PACING_POLICY_KEY).unwrap(), "target_only");
    }

    #[test]
    fn test_unparseable_stored_value_falls_back_to_default() {
        let (repo, _dir) = create_test_repository();
        let mut conn = get_connection(&repo.pool).unwrap();
        diesel::replace_into(app_settings)
            .values(&AppSettingDB {
                setting_key: PACING_POLICY_KEY.to_string(),
                setting_value: "weekly".to_string(),
            })
            .execute(&mut conn)
            .unwrap();

        assert_eq!(
            repo.get_settings().unwrap().pacing_policy,
            PacingPolicy::WithExplicitStart
        );
    }
}
