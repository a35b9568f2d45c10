//! Password history storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::PasswordHistory;

/// Flat storage shape of [`PasswordHistory`], column-for-column with `password_history`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PasswordHistoryRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub password_hash: String,
    pub set_at: DateTime<Utc>,
}

impl From<&PasswordHistory> for PasswordHistoryRecord {
    fn from(entry: &PasswordHistory) -> Self {
        PasswordHistoryRecord {
            entity: EntityInfoRecord::from(&entry.info),
            user_id: entry.user_id.as_uuid(),
            password_hash: entry.password_hash.clone(),
            set_at: entry.set_at,
        }
    }
}

/// Rebuild a [`PasswordHistory`] from its storage record
pub fn password_history_from_record(
    record: PasswordHistoryRecord,
) -> Result<PasswordHistory, MappingError> {
    Ok(PasswordHistory {
        info: EntityInfo::from_record(record.entity, "PasswordHistory")?,
        user_id: EntityId::new(record.user_id),
        password_hash: record.password_hash,
        set_at: record.set_at,
    })
}
