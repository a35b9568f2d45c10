//! Password reset token storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::PasswordResetToken;

/// Flat storage shape of [`PasswordResetToken`], column-for-column with
/// `password_reset_tokens`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PasswordResetTokenRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub consumed_at: Option<DateTime<Utc>>,
}

impl From<&PasswordResetToken> for PasswordResetTokenRecord {
    fn from(token: &PasswordResetToken) -> Self {
        PasswordResetTokenRecord {
            entity: EntityInfoRecord::from(&token.info),
            user_id: token.user_id.as_uuid(),
            token_hash: token.token_hash.clone(),
            expires_at: token.expires_at,
            consumed_at: token.consumed_at,
        }
    }
}

/// Rebuild a [`PasswordResetToken`] from its storage record
pub fn password_reset_token_from_record(
    record: PasswordResetTokenRecord,
) -> Result<PasswordResetToken, MappingError> {
    Ok(PasswordResetToken {
        info: EntityInfo::from_record(record.entity, "PasswordResetToken")?,
        user_id: EntityId::new(record.user_id),
        token_hash: record.token_hash,
        expires_at: record.expires_at,
        consumed_at: record.consumed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_token() -> PasswordResetToken {
        PasswordResetToken::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "auth-gateway",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "password_reset.request",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            "sha256:reset".to_string(),
            Utc::now() + chrono::Duration::hours(2),
            None,
        )
    }

    #[test]
    fn test_reset_token_to_record_copies_every_field() {
        let token = sample_token();
        let record = PasswordResetTokenRecord::from(&token);

        assert_eq!(record.user_id, token.user_id.as_uuid());
        assert_eq!(record.token_hash, "sha256:reset");
        assert_eq!(record.expires_at, token.expires_at);
        assert!(record.consumed_at.is_none());
    }

    #[test]
    fn test_consumed_token_round_trip() {
        let mut token = sample_token();
        token.consumed_at = Some(Utc::now());

        let rebuilt =
            password_reset_token_from_record(PasswordResetTokenRecord::from(&token)).unwrap();
        assert_eq!(rebuilt, token);
        assert!(!rebuilt.is_usable());
    }
}
