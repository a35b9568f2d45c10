//! Role claim storage record and mapping factories

use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::RoleClaim;

/// Flat storage shape of [`RoleClaim`], column-for-column with `role_claims`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RoleClaimRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub role_id: Uuid,
    pub claim_code: String,
    pub claim_value: String,
}

impl From<&RoleClaim> for RoleClaimRecord {
    fn from(claim: &RoleClaim) -> Self {
        RoleClaimRecord {
            entity: EntityInfoRecord::from(&claim.info),
            role_id: claim.role_id.as_uuid(),
            claim_code: claim.claim_code.clone(),
            claim_value: claim.claim_value.clone(),
        }
    }
}

/// Rebuild a [`RoleClaim`] from its storage record
pub fn role_claim_from_record(record: RoleClaimRecord) -> Result<RoleClaim, MappingError> {
    Ok(RoleClaim {
        info: EntityInfo::from_record(record.entity, "RoleClaim")?,
        role_id: EntityId::new(record.role_id),
        claim_code: record.claim_code,
        claim_value: record.claim_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_claim() -> RoleClaim {
        RoleClaim::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "tenant-admin",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "role.grant_claim",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            "catalog.manage".to_string(),
            "true".to_string(),
        )
    }

    #[test]
    fn test_role_claim_to_record_copies_every_field() {
        let claim = sample_claim();
        let record = RoleClaimRecord::from(&claim);

        assert_eq!(record.role_id, claim.role_id.as_uuid());
        assert_eq!(record.claim_code, "catalog.manage");
        assert_eq!(record.claim_value, "true");
    }

    #[test]
    fn test_role_claim_round_trip() {
        let claim = sample_claim();
        let rebuilt = role_claim_from_record(RoleClaimRecord::from(&claim)).unwrap();
        assert_eq!(rebuilt, claim);
    }
}
