//! User consent storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::{UserConsent, UserConsentStatus};

/// Flat storage shape of [`UserConsent`], column-for-column with `user_consents`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserConsentRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub consent_term_id: Uuid,
    pub status: i16,
    pub granted_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl From<&UserConsent> for UserConsentRecord {
    fn from(consent: &UserConsent) -> Self {
        UserConsentRecord {
            entity: EntityInfoRecord::from(&consent.info),
            user_id: consent.user_id.as_uuid(),
            consent_term_id: consent.consent_term_id.as_uuid(),
            status: consent.status.ordinal(),
            granted_at: consent.granted_at,
            revoked_at: consent.revoked_at,
        }
    }
}

/// Rebuild a [`UserConsent`] from its storage record
pub fn user_consent_from_record(record: UserConsentRecord) -> Result<UserConsent, MappingError> {
    Ok(UserConsent {
        info: EntityInfo::from_record(record.entity, "UserConsent")?,
        user_id: EntityId::new(record.user_id),
        consent_term_id: EntityId::new(record.consent_term_id),
        status: UserConsentStatus::from_ordinal(record.status)?,
        granted_at: record.granted_at,
        revoked_at: record.revoked_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_consent() -> UserConsent {
        UserConsent::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "user-42",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "user_consent.grant",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            EntityId::new(Uuid::new_v4()),
            UserConsentStatus::Active,
            Utc::now(),
            None,
        )
    }

    #[test]
    fn test_user_consent_to_record_copies_every_field() {
        let consent = sample_consent();
        let record = UserConsentRecord::from(&consent);

        assert_eq!(record.user_id, consent.user_id.as_uuid());
        assert_eq!(record.consent_term_id, consent.consent_term_id.as_uuid());
        assert_eq!(record.status, 1);
        assert_eq!(record.granted_at, consent.granted_at);
        assert!(record.revoked_at.is_none());
    }

    #[test]
    fn test_revoked_record_maps_back_to_revoked_status() {
        let mut record = UserConsentRecord::from(&sample_consent());
        record.status = 2;
        record.revoked_at = Some(Utc::now());

        let consent = user_consent_from_record(record).unwrap();
        assert_eq!(consent.status, UserConsentStatus::Revoked);
        assert!(consent.revoked_at.is_some());
    }

    #[test]
    fn test_user_consent_round_trip() {
        let consent = sample_consent();
        let rebuilt = user_consent_from_record(UserConsentRecord::from(&consent)).unwrap();
        assert_eq!(rebuilt, consent);
    }

    #[test]
    fn test_unknown_status_ordinal_is_fatal() {
        let mut record = UserConsentRecord::from(&sample_consent());
        record.status = -2;

        assert_eq!(
            user_consent_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "UserConsent",
                field: "status",
                value: -2,
            })
        );
    }
}
