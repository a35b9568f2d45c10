//! Recovery code storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::RecoveryCode;

/// Flat storage shape of [`RecoveryCode`], column-for-column with `recovery_codes`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RecoveryCodeRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub code_hash: String,
    pub used_at: Option<DateTime<Utc>>,
}

impl From<&RecoveryCode> for RecoveryCodeRecord {
    fn from(code: &RecoveryCode) -> Self {
        RecoveryCodeRecord {
            entity: EntityInfoRecord::from(&code.info),
            user_id: code.user_id.as_uuid(),
            code_hash: code.code_hash.clone(),
            used_at: code.used_at,
        }
    }
}

/// Rebuild a [`RecoveryCode`] from its storage record
pub fn recovery_code_from_record(record: RecoveryCodeRecord) -> Result<RecoveryCode, MappingError> {
    Ok(RecoveryCode {
        info: EntityInfo::from_record(record.entity, "RecoveryCode")?,
        user_id: EntityId::new(record.user_id),
        code_hash: record.code_hash,
        used_at: record.used_at,
    })
}
