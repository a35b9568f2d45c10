//! Service client scope storage record and mapping factories

use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::ServiceClientScope;

/// Flat storage shape of [`ServiceClientScope`], column-for-column with
/// `service_client_scopes`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ServiceClientScopeRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub service_client_id: Uuid,
    pub scope: String,
}

impl From<&ServiceClientScope> for ServiceClientScopeRecord {
    fn from(scope: &ServiceClientScope) -> Self {
        ServiceClientScopeRecord {
            entity: EntityInfoRecord::from(&scope.info),
            service_client_id: scope.service_client_id.as_uuid(),
            scope: scope.scope.clone(),
        }
    }
}

/// Rebuild a [`ServiceClientScope`] from its storage record
pub fn service_client_scope_from_record(
    record: ServiceClientScopeRecord,
) -> Result<ServiceClientScope, MappingError> {
    Ok(ServiceClientScope {
        info: EntityInfo::from_record(record.entity, "ServiceClientScope")?,
        service_client_id: EntityId::new(record.service_client_id),
        scope: record.scope,
    })
}
