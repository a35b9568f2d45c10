//! MFA setup storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::MfaSetup;

/// Flat storage shape of [`MfaSetup`], column-for-column with `mfa_setups`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MfaSetupRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub method: String,
    pub secret: String,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl From<&MfaSetup> for MfaSetupRecord {
    fn from(setup: &MfaSetup) -> Self {
        MfaSetupRecord {
            entity: EntityInfoRecord::from(&setup.info),
            user_id: setup.user_id.as_uuid(),
            method: setup.method.clone(),
            secret: setup.secret.clone(),
            confirmed_at: setup.confirmed_at,
        }
    }
}

/// Rebuild an [`MfaSetup`] from its storage record
pub fn mfa_setup_from_record(record: MfaSetupRecord) -> Result<MfaSetup, MappingError> {
    Ok(MfaSetup {
        info: EntityInfo::from_record(record.entity, "MfaSetup")?,
        user_id: EntityId::new(record.user_id),
        method: record.method,
        secret: record.secret,
        confirmed_at: record.confirmed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_setup() -> MfaSetup {
        MfaSetup::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "user-8",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "mfa.enroll",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            "totp".to_string(),
            "JBSWY3DPEHPK3PXP".to_string(),
            None,
        )
    }

    #[test]
    fn test_mfa_setup_to_record_copies_every_field() {
        let setup = sample_setup();
        let record = MfaSetupRecord::from(&setup);

        assert_eq!(record.user_id, setup.user_id.as_uuid());
        assert_eq!(record.method, "totp");
        assert_eq!(record.secret, "JBSWY3DPEHPK3PXP");
        assert!(record.confirmed_at.is_none());
    }

    #[test]
    fn test_confirmed_setup_round_trip() {
        let mut setup = sample_setup();
        setup.confirmed_at = Some(Utc::now());

        let rebuilt = mfa_setup_from_record(MfaSetupRecord::from(&setup)).unwrap();
        assert_eq!(rebuilt, setup);
        assert!(rebuilt.is_confirmed());
    }
}
