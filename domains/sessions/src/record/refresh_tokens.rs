//! Refresh token storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::{RefreshToken, RefreshTokenStatus};

/// Flat storage shape of [`RefreshToken`], column-for-column with `refresh_tokens`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RefreshTokenRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub session_id: Uuid,
    pub token_hash: String,
    pub family_id: Uuid,
    pub status: i16,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl From<&RefreshToken> for RefreshTokenRecord {
    fn from(token: &RefreshToken) -> Self {
        RefreshTokenRecord {
            entity: EntityInfoRecord::from(&token.info),
            session_id: token.session_id.as_uuid(),
            token_hash: token.token_hash.clone(),
            family_id: token.family_id,
            status: token.status.ordinal(),
            expires_at: token.expires_at,
            used_at: token.used_at,
        }
    }
}

/// Rebuild a [`RefreshToken`] from its storage record
pub fn refresh_token_from_record(record: RefreshTokenRecord) -> Result<RefreshToken, MappingError> {
    Ok(RefreshToken {
        info: EntityInfo::from_record(record.entity, "RefreshToken")?,
        session_id: EntityId::new(record.session_id),
        token_hash: record.token_hash,
        family_id: record.family_id,
        status: RefreshTokenStatus::from_ordinal(record.status)?,
        expires_at: record.expires_at,
        used_at: record.used_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_token() -> RefreshToken {
        RefreshToken::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "user-3",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "refresh_token.rotate",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            "sha256:1f4c9a".to_string(),
            Uuid::new_v4(),
            RefreshTokenStatus::Active,
            Utc::now() + chrono::Duration::days(14),
            None,
        )
    }

    #[test]
    fn test_refresh_token_to_record_copies_every_field() {
        let token = sample_token();
        let record = RefreshTokenRecord::from(&token);

        assert_eq!(record.session_id, token.session_id.as_uuid());
        assert_eq!(record.token_hash, "sha256:1f4c9a");
        assert_eq!(record.family_id, token.family_id);
        assert_eq!(record.status, 1);
        assert_eq!(record.expires_at, token.expires_at);
        assert!(record.used_at.is_none());
    }

    #[test]
    fn test_record_with_status_two_maps_to_used() {
        let mut record = RefreshTokenRecord::from(&sample_token());
        record.status = 2;
        record.used_at = Some(Utc::now());

        let token = refresh_token_from_record(record).unwrap();
        assert_eq!(token.status, RefreshTokenStatus::Used);
    }

    #[test]
    fn test_record_with_status_three_maps_to_revoked() {
        let mut record = RefreshTokenRecord::from(&sample_token());
        record.status = 3;

        let token = refresh_token_from_record(record).unwrap();
        assert_eq!(token.status, RefreshTokenStatus::Revoked);
    }

    #[test]
    fn test_refresh_token_round_trip_from_entity() {
        let token = sample_token();
        let rebuilt = refresh_token_from_record(RefreshTokenRecord::from(&token)).unwrap();
        assert_eq!(rebuilt, token);
    }

    #[test]
    fn test_refresh_token_round_trip_from_record() {
        let record = RefreshTokenRecord::from(&sample_token());
        let rebuilt = RefreshTokenRecord::from(&refresh_token_from_record(record.clone()).unwrap());
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_unknown_status_ordinal_is_fatal() {
        let mut record = RefreshTokenRecord::from(&sample_token());
        record.status = 4;

        assert_eq!(
            refresh_token_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "RefreshToken",
                field: "status",
                value: 4,
            })
        );
    }
}
