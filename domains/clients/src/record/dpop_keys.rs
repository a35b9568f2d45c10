//! DPoP key storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::{DPoPKey, DPoPKeyStatus, JwkThumbprint};

/// Flat storage shape of [`DPoPKey`], column-for-column with `dpop_keys`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DPoPKeyRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub jwk_thumbprint: String,
    pub public_key_jwk: String,
    pub status: i16,
    pub first_seen_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&DPoPKey> for DPoPKeyRecord {
    fn from(key: &DPoPKey) -> Self {
        DPoPKeyRecord {
            entity: EntityInfoRecord::from(&key.info),
            user_id: key.user_id.as_uuid(),
            jwk_thumbprint: key.jwk_thumbprint.as_str().to_string(),
            public_key_jwk: key.public_key_jwk.clone(),
            status: key.status.ordinal(),
            first_seen_at: key.first_seen_at,
            expires_at: key.expires_at,
        }
    }
}

/// Rebuild a [`DPoPKey`] from its storage record
pub fn dpop_key_from_record(record: DPoPKeyRecord) -> Result<DPoPKey, MappingError> {
    Ok(DPoPKey {
        info: EntityInfo::from_record(record.entity, "DPoPKey")?,
        user_id: EntityId::new(record.user_id),
        jwk_thumbprint: JwkThumbprint::new(record.jwk_thumbprint),
        public_key_jwk: record.public_key_jwk,
        status: DPoPKeyStatus::from_ordinal(record.status)?,
        first_seen_at: record.first_seen_at,
        expires_at: record.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_key() -> DPoPKey {
        DPoPKey::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "user-17",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "dpop_key.bind",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            JwkThumbprint::new("0ZcOCORZNYy-DWpqq30jZyJGHTN0d2HglBV3uiguA4I"),
            r#"{"kty":"EC","crv":"P-256","x":"...","y":"..."}"#.to_string(),
            DPoPKeyStatus::Active,
            Utc::now(),
            Some(Utc::now() + chrono::Duration::days(30)),
        )
    }

    #[test]
    fn test_dpop_key_to_record_unwraps_thumbprint() {
        let key = sample_key();
        let record = DPoPKeyRecord::from(&key);

        assert_eq!(
            record.jwk_thumbprint,
            "0ZcOCORZNYy-DWpqq30jZyJGHTN0d2HglBV3uiguA4I"
        );
        assert_eq!(record.user_id, key.user_id.as_uuid());
        assert_eq!(record.status, 1);
        assert_eq!(record.first_seen_at, key.first_seen_at);
    }

    #[test]
    fn test_dpop_key_round_trip() {
        let key = sample_key();
        let rebuilt = dpop_key_from_record(DPoPKeyRecord::from(&key)).unwrap();
        assert_eq!(rebuilt, key);
    }

    #[test]
    fn test_revoked_ordinal_maps_back() {
        let mut record = DPoPKeyRecord::from(&sample_key());
        record.status = 2;

        let key = dpop_key_from_record(record).unwrap();
        assert_eq!(key.status, DPoPKeyStatus::Revoked);
    }

    #[test]
    fn test_unknown_status_ordinal_is_fatal() {
        let mut record = DPoPKeyRecord::from(&sample_key());
        record.status = 7;

        assert_eq!(
            dpop_key_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "DPoPKey",
                field: "status",
                value: 7,
            })
        );
    }
}
