//! Service client claim storage record and mapping factories

use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::ServiceClientClaim;

/// Flat storage shape of [`ServiceClientClaim`], column-for-column with
/// `service_client_claims`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ServiceClientClaimRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub service_client_id: Uuid,
    pub claim_code: String,
    pub claim_value: String,
}

impl From<&ServiceClientClaim> for ServiceClientClaimRecord {
    fn from(claim: &ServiceClientClaim) -> Self {
        ServiceClientClaimRecord {
            entity: EntityInfoRecord::from(&claim.info),
            service_client_id: claim.service_client_id.as_uuid(),
            claim_code: claim.claim_code.clone(),
            claim_value: claim.claim_value.clone(),
        }
    }
}

/// Rebuild a [`ServiceClientClaim`] from its storage record
pub fn service_client_claim_from_record(
    record: ServiceClientClaimRecord,
) -> Result<ServiceClientClaim, MappingError> {
    Ok(ServiceClientClaim {
        info: EntityInfo::from_record(record.entity, "ServiceClientClaim")?,
        service_client_id: EntityId::new(record.service_client_id),
        claim_code: record.claim_code,
        claim_value: record.claim_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_claim() -> ServiceClientClaim {
        ServiceClientClaim::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "svc-admin",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "service_client.grant_claim",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            "inventory.region".to_string(),
            "eu-west".to_string(),
        )
    }

    #[test]
    fn test_claim_to_record_copies_every_field() {
        let claim = sample_claim();
        let record = ServiceClientClaimRecord::from(&claim);

        assert_eq!(record.service_client_id, claim.service_client_id.as_uuid());
        assert_eq!(record.claim_code, "inventory.region");
        assert_eq!(record.claim_value, "eu-west");
    }

    #[test]
    fn test_claim_round_trip() {
        let claim = sample_claim();
        let rebuilt =
            service_client_claim_from_record(ServiceClientClaimRecord::from(&claim)).unwrap();
        assert_eq!(rebuilt, claim);
    }
}
