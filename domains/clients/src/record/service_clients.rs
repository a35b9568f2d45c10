//! Service client storage record and mapping factories

use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::{ServiceClient, ServiceClientStatus};

/// Flat storage shape of [`ServiceClient`], column-for-column with `service_clients`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ServiceClientRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub name: String,
    pub identifier: String,
    pub description: Option<String>,
    pub status: i16,
}

impl From<&ServiceClient> for ServiceClientRecord {
    fn from(client: &ServiceClient) -> Self {
        ServiceClientRecord {
            entity: EntityInfoRecord::from(&client.info),
            name: client.name.clone(),
            identifier: client.identifier.clone(),
            description: client.description.clone(),
            status: client.status.ordinal(),
        }
    }
}

/// Rebuild a [`ServiceClient`] from its storage record
pub fn service_client_from_record(
    record: ServiceClientRecord,
) -> Result<ServiceClient, MappingError> {
    Ok(ServiceClient {
        info: EntityInfo::from_record(record.entity, "ServiceClient")?,
        name: record.name,
        identifier: record.identifier,
        description: record.description,
        status: ServiceClientStatus::from_ordinal(record.status)?,
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

    fn sample_client() -> ServiceClient {
        ServiceClient::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "svc-admin",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "service_client.register",
                ),
                Some(EntityChangeInfo::new(
                    "svc-admin",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "service_client.rename",
                )),
                RegistryVersion::new(2),
            ),
            "Checkout Worker".to_string(),
            "svc-checkout".to_string(),
            Some("Processes storefront checkouts".to_string()),
            ServiceClientStatus::Active,
        )
    }

    #[test]
    fn test_service_client_to_record_copies_every_field() {
        let client = sample_client();
        let record = ServiceClientRecord::from(&client);

        assert_eq!(record.name, "Checkout Worker");
        assert_eq!(record.identifier, "svc-checkout");
        assert_eq!(
            record.description.as_deref(),
            Some("Processes storefront checkouts")
        );
        assert_eq!(record.status, 1);
        assert_eq!(record.entity.version, 2);
        assert!(record.entity.changed_by.is_some());
    }

    #[test]
    fn test_service_client_round_trip_with_change_stamp() {
        let client = sample_client();
        let rebuilt = service_client_from_record(ServiceClientRecord::from(&client)).unwrap();
        assert_eq!(rebuilt, client);
    }

    #[test]
    fn test_revoked_ordinal_maps_back() {
        let mut record = ServiceClientRecord::from(&sample_client());
        record.status = 2;

        let client = service_client_from_record(record).unwrap();
        assert_eq!(client.status, ServiceClientStatus::Revoked);
        assert!(!client.is_active());
    }

    #[test]
    fn test_unknown_status_ordinal_is_fatal() {
        let mut record = ServiceClientRecord::from(&sample_client());
        record.status = 99;

        assert!(matches!(
            service_client_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "ServiceClient",
                ..
            })
        ));
    }
}
