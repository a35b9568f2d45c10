//! Claim dependency storage record and mapping factories

use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::ClaimDependency;

/// Flat storage shape of [`ClaimDependency`], column-for-column with
/// `claim_dependencies`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ClaimDependencyRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub claim_id: Uuid,
    pub depends_on_claim_id: Uuid,
}

impl From<&ClaimDependency> for ClaimDependencyRecord {
    fn from(dependency: &ClaimDependency) -> Self {
        ClaimDependencyRecord {
            entity: EntityInfoRecord::from(&dependency.info),
            claim_id: dependency.claim_id.as_uuid(),
            depends_on_claim_id: dependency.depends_on_claim_id.as_uuid(),
        }
    }
}

/// Rebuild a [`ClaimDependency`] from its storage record
pub fn claim_dependency_from_record(
    record: ClaimDependencyRecord,
) -> Result<ClaimDependency, MappingError> {
    Ok(ClaimDependency {
        info: EntityInfo::from_record(record.entity, "ClaimDependency")?,
        claim_id: EntityId::new(record.claim_id),
        depends_on_claim_id: EntityId::new(record.depends_on_claim_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    #[test]
    fn test_claim_dependency_round_trip() {
        let dependency = ClaimDependency::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "platform",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "migration",
                    "claim.link_dependency",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            EntityId::new(Uuid::new_v4()),
        );

        let record = ClaimDependencyRecord::from(&dependency);
        assert_eq!(record.claim_id, dependency.claim_id.as_uuid());
        assert_eq!(
            record.depends_on_claim_id,
            dependency.depends_on_claim_id.as_uuid()
        );

        let rebuilt = claim_dependency_from_record(record).unwrap();
        assert_eq!(rebuilt, dependency);
    }
}
