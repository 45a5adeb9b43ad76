//! Database model for persisted snapshots.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// One serialized snapshot per slot key.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotDB {
    pub slot_key: String,
    pub payload: String,
    pub updated_at: NaiveDateTime,
}
