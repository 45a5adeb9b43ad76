use chrono::Utc;
use diesel::prelude::*;
use log::{debug, warn};
use std::sync::Arc;

use super::model::SnapshotDB;
use crate::db::{get_connection, DbPool};
use crate::errors::{write_failed, StorageError};
use crate::schema::snapshots;
use goalpace_core::constants::SNAPSHOT_SLOT_KEY;
use goalpace_core::errors::Result;
use goalpace_core::snapshot::{Snapshot, SnapshotRepositoryTrait};

pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    slot_key: String,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self::with_slot(pool, SNAPSHOT_SLOT_KEY)
    }

    pub fn with_slot(pool: Arc<DbPool>, slot_key: &str) -> Self {
        SnapshotRepository {
            pool,
            slot_key: slot_key.to_string(),
        }
    }

    /// Strict read: `Ok(None)` when the slot was never written, an error when
    /// the payload cannot be read or decoded.
    pub fn read_snapshot(&self) -> Result<Option<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let payload = snapshots::table
            .filter(snapshots::slot_key.eq(&self.slot_key))
            .select(snapshots::payload)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        payload
            .map(|payload| Snapshot::from_json(&payload))
            .transpose()
    }
}

impl SnapshotRepositoryTrait for SnapshotRepository {
    fn load_snapshot(&self) -> Snapshot {
        match self.read_snapshot() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!("No snapshot stored under '{}'", self.slot_key);
                Snapshot::empty()
            }
            Err(e) => {
                warn!(
                    "Failed to read snapshot '{}', starting from an empty one: {}",
                    self.slot_key, e
                );
                Snapshot::empty()
            }
        }
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let row = SnapshotDB {
            slot_key: self.slot_key.clone(),
            payload: snapshot.to_json()?,
            updated_at: Utc::now().naive_utc(),
        };

        let mut conn = get_connection(&self.pool).map_err(write_failed)?;
        conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::replace_into(snapshots::table)
                .values(&row)
                .execute(conn)
        })
        .map_err(write_failed)?;

        debug!(
            "Saved snapshot '{}' with {} contribution(s)",
            self.slot_key,
            snapshot.contributions.len()
        );
        Ok(())
    }
}
