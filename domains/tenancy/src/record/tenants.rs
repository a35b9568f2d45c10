//! Tenant storage record and mapping factories

use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::{Tenant, TenantStatus, TenantTier};

/// Flat storage shape of [`Tenant`], column-for-column with `tenants`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TenantRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub name: String,
    pub status: i16,
    pub tier: i16,
    pub primary_domain: Option<String>,
}

impl From<&Tenant> for TenantRecord {
    fn from(tenant: &Tenant) -> Self {
        TenantRecord {
            entity: EntityInfoRecord::from(&tenant.info),
            name: tenant.name.clone(),
            status: tenant.status.ordinal(),
            tier: tenant.tier.ordinal(),
            primary_domain: tenant.primary_domain.clone(),
        }
    }
}

/// Rebuild a [`Tenant`] from its storage record
pub fn tenant_from_record(record: TenantRecord) -> Result<Tenant, MappingError> {
    Ok(Tenant {
        info: EntityInfo::from_record(record.entity, "Tenant")?,
        name: record.name,
        status: TenantStatus::from_ordinal(record.status)?,
        tier: TenantTier::from_ordinal(record.tier)?,
        primary_domain: record.primary_domain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tradewind_common::{
        CorrelationId, EntityChangeInfo, EntityId, RegistryVersion, TenantCode,
    };
    use uuid::Uuid;

    fn sample_tenant() -> Tenant {
        Tenant::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "provisioner",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "tenant.provision",
                ),
                None,
                RegistryVersion::new(1),
            ),
            "Acme Storefront".to_string(),
            TenantStatus::Active,
            TenantTier::Professional,
            Some("shop.acme.example".to_string()),
        )
    }

    #[test]
    fn test_tenant_to_record_copies_every_field() {
        let tenant = sample_tenant();
        let record = TenantRecord::from(&tenant);

        assert_eq!(record.entity.id, tenant.info.id.as_uuid());
        assert_eq!(record.entity.tenant_code, tenant.info.tenant.as_uuid());
        assert_eq!(record.name, "Acme Storefront");
        assert_eq!(record.status, 1);
        assert_eq!(record.tier, 2);
        assert_eq!(record.primary_domain.as_deref(), Some("shop.acme.example"));
        assert_eq!(record.entity.version, 1);
    }

    #[test]
    fn test_record_with_tier_three_maps_to_enterprise() {
        let mut record = TenantRecord::from(&sample_tenant());
        record.tier = 3;

        let tenant = tenant_from_record(record).unwrap();
        assert_eq!(tenant.tier, TenantTier::Enterprise);
    }

    #[test]
    fn test_record_with_status_two_maps_to_suspended() {
        let mut record = TenantRecord::from(&sample_tenant());
        record.status = 2;

        let tenant = tenant_from_record(record).unwrap();
        assert_eq!(tenant.status, TenantStatus::Suspended);
    }

    #[test]
    fn test_tenant_round_trip_from_entity() {
        let tenant = sample_tenant();
        let rebuilt = tenant_from_record(TenantRecord::from(&tenant)).unwrap();
        assert_eq!(rebuilt, tenant);
    }

    #[test]
    fn test_tenant_round_trip_from_record() {
        let record = TenantRecord::from(&sample_tenant());
        let rebuilt = TenantRecord::from(&tenant_from_record(record.clone()).unwrap());
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_unknown_status_ordinal_is_fatal() {
        let mut record = TenantRecord::from(&sample_tenant());
        record.status = 9;

        assert_eq!(
            tenant_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "Tenant",
                field: "status",
                value: 9,
            })
        );
    }

    #[test]
    fn test_unknown_tier_ordinal_is_fatal() {
        let mut record = TenantRecord::from(&sample_tenant());
        record.tier = 0;

        assert_eq!(
            tenant_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "Tenant",
                field: "tier",
                value: 0,
            })
        );
    }
}
