//! API key storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::{ApiKey, ApiKeyStatus};

/// Flat storage shape of [`ApiKey`], column-for-column with `api_keys`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ApiKeyRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub service_client_id: Uuid,
    pub key_prefix: String,
    pub key_hash: String,
    pub status: i16,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&ApiKey> for ApiKeyRecord {
    fn from(key: &ApiKey) -> Self {
        ApiKeyRecord {
            entity: EntityInfoRecord::from(&key.info),
            service_client_id: key.service_client_id.as_uuid(),
            key_prefix: key.key_prefix.clone(),
            key_hash: key.key_hash.clone(),
            status: key.status.ordinal(),
            expires_at: key.expires_at,
        }
    }
}

/// Rebuild an [`ApiKey`] from its storage record
pub fn api_key_from_record(record: ApiKeyRecord) -> Result<ApiKey, MappingError> {
    Ok(ApiKey {
        info: EntityInfo::from_record(record.entity, "ApiKey")?,
        service_client_id: EntityId::new(record.service_client_id),
        key_prefix: record.key_prefix,
        key_hash: record.key_hash,
        status: ApiKeyStatus::from_ordinal(record.status)?,
        expires_at: record.expires_at,
    })
}
