//! Flat storage shape of the shared audit envelope
//!
//! Every entity table carries the same thirteen envelope columns. Domain
//! record types embed [`EntityInfoRecord`] with `#[sqlx(flatten)]` and add
//! their entity-specific columns next to it.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::entity::{CorrelationId, EntityChangeInfo, EntityId, EntityInfo, RegistryVersion, TenantCode};

/// Errors produced when reconstructing entities from storage records
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("unknown {field} ordinal {value} for {entity}")]
    UnknownOrdinal {
        entity: &'static str,
        field: &'static str,
        value: i16,
    },

    #[error("changed-* audit columns for {entity} must be all present or all absent")]
    PartialChangeGroup { entity: &'static str },
}

/// Envelope columns shared by every entity table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EntityInfoRecord {
    pub id: Uuid,
    pub tenant_code: Uuid,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub created_correlation_id: Uuid,
    pub created_execution_origin: String,
    pub created_operation_code: String,
    pub changed_by: Option<String>,
    pub changed_at: Option<DateTime<Utc>>,
    pub changed_correlation_id: Option<Uuid>,
    pub changed_execution_origin: Option<String>,
    pub changed_operation_code: Option<String>,
    pub version: i64,
}

impl From<&EntityInfo> for EntityInfoRecord {
    fn from(info: &EntityInfo) -> Self {
        let changed = info.last_changed.as_ref();
        EntityInfoRecord {
            id: info.id.as_uuid(),
            tenant_code: info.tenant.as_uuid(),
            created_by: info.created.performed_by.clone(),
            created_at: info.created.performed_at,
            created_correlation_id: info.created.correlation_id.as_uuid(),
            created_execution_origin: info.created.execution_origin.clone(),
            created_operation_code: info.created.operation_code.clone(),
            changed_by: changed.map(|c| c.performed_by.clone()),
            changed_at: changed.map(|c| c.performed_at),
            changed_correlation_id: changed.map(|c| c.correlation_id.as_uuid()),
            changed_execution_origin: changed.map(|c| c.execution_origin.clone()),
            changed_operation_code: changed.map(|c| c.operation_code.clone()),
            version: info.version.value(),
        }
    }
}

impl EntityInfo {
    /// Rebuild the audit envelope from its storage columns
    ///
    /// The changed-* group must be populated as a whole or not at all; a
    /// strict subset is rejected rather than silently partially applied.
    pub fn from_record(
        record: EntityInfoRecord,
        entity: &'static str,
    ) -> Result<Self, MappingError> {
        let last_changed = change_info_from_columns(
            record.changed_by,
            record.changed_at,
            record.changed_correlation_id,
            record.changed_execution_origin,
            record.changed_operation_code,
            entity,
        )?;

        Ok(EntityInfo {
            id: EntityId::new(record.id),
            tenant: TenantCode::new(record.tenant_code),
            created: EntityChangeInfo {
                performed_by: record.created_by,
                performed_at: record.created_at,
                correlation_id: CorrelationId::new(record.created_correlation_id),
                execution_origin: record.created_execution_origin,
                operation_code: record.created_operation_code,
            },
            last_changed,
            version: RegistryVersion::new(record.version),
        })
    }
}

fn change_info_from_columns(
    by: Option<String>,
    at: Option<DateTime<Utc>>,
    correlation_id: Option<Uuid>,
    execution_origin: Option<String>,
    operation_code: Option<String>,
    entity: &'static str,
) -> Result<Option<EntityChangeInfo>, MappingError> {
    match (by, at, correlation_id, execution_origin, operation_code) {
        (None, None, None, None, None) => Ok(None),
        (Some(by), Some(at), Some(correlation_id), Some(execution_origin), Some(operation_code)) => {
            Ok(Some(EntityChangeInfo {
                performed_by: by,
                performed_at: at,
                correlation_id: CorrelationId::new(correlation_id),
                execution_origin,
                operation_code,
            }))
        }
        _ => Err(MappingError::PartialChangeGroup { entity }),
    }
}
