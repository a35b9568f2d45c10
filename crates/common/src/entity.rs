//! Value objects shared by every persisted identity entity
//!
//! Every entity in the identity domain carries the same audit envelope:
//! identity, tenant association, creation stamp, optional last-change stamp,
//! and an optimistic concurrency token. Domain crates embed [`EntityInfo`]
//! and add their entity-specific fields on top.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque entity identifier wrapping a UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new(id: Uuid) -> Self {
        EntityId(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        EntityId(id)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tenant association code
///
/// Every identity entity is scoped to exactly one tenant of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantCode(Uuid);

impl TenantCode {
    pub fn new(code: Uuid) -> Self {
        TenantCode(code)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for TenantCode {
    fn from(code: Uuid) -> Self {
        TenantCode(code)
    }
}

impl From<TenantCode> for Uuid {
    fn from(code: TenantCode) -> Self {
        code.0
    }
}

impl fmt::Display for TenantCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation id of the request that performed a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn new(id: Uuid) -> Self {
        CorrelationId(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CorrelationId {
    fn from(id: Uuid) -> Self {
        CorrelationId(id)
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optimistic concurrency token
///
/// Monotonic per entity row; repositories bump it on every successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryVersion(i64);

impl RegistryVersion {
    pub fn new(version: i64) -> Self {
        RegistryVersion(version)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// The version a successful update writes back
    pub fn next(&self) -> Self {
        RegistryVersion(self.0 + 1)
    }
}

impl fmt::Display for RegistryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audit stamp describing who performed a change, when, and under which
/// request context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChangeInfo {
    /// Principal that performed the change (user id or service identifier)
    pub performed_by: String,
    pub performed_at: DateTime<Utc>,
    pub correlation_id: CorrelationId,
    /// Where the change originated ("api", "worker", "migration", ...)
    pub execution_origin: String,
    /// Business operation code ("user.register", "session.revoke", ...)
    pub operation_code: String,
}

impl EntityChangeInfo {
    pub fn new(
        performed_by: impl Into<String>,
        performed_at: DateTime<Utc>,
        correlation_id: CorrelationId,
        execution_origin: impl Into<String>,
        operation_code: impl Into<String>,
    ) -> Self {
        EntityChangeInfo {
            performed_by: performed_by.into(),
            performed_at,
            correlation_id,
            execution_origin: execution_origin.into(),
            operation_code: operation_code.into(),
        }
    }
}

/// Common audit envelope shared by all identity entities
///
/// `last_changed` is either fully present or fully absent; a partially
/// populated change stamp cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInfo {
    pub id: EntityId,
    pub tenant: TenantCode,
    pub created: EntityChangeInfo,
    pub last_changed: Option<EntityChangeInfo>,
    pub version: RegistryVersion,
}

impl EntityInfo {
    pub fn new(
        id: EntityId,
        tenant: TenantCode,
        created: EntityChangeInfo,
        last_changed: Option<EntityChangeInfo>,
        version: RegistryVersion,
    ) -> Self {
        EntityInfo {
            id,
            tenant,
            created,
            last_changed,
            version,
        }
    }

    /// Whether the entity has been modified since creation
    pub fn has_changes(&self) -> bool {
        self.last_changed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change_info() -> EntityChangeInfo {
        EntityChangeInfo::new(
            "user-1",
            Utc::now(),
            CorrelationId::new(Uuid::new_v4()),
            "api",
            "user.register",
        )
    }

    #[test]
    fn test_entity_id_uuid_round_trip() {
        let raw = Uuid::new_v4();
        let id = EntityId::new(raw);

        assert_eq!(id.as_uuid(), raw);
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(EntityId::from(raw), id);
    }

    #[test]
    fn test_entity_id_display_matches_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(EntityId::new(raw).to_string(), raw.to_string());
    }

    #[test]
    fn test_tenant_code_round_trip() {
        let raw = Uuid::new_v4();
        let code = TenantCode::new(raw);

        assert_eq!(code.as_uuid(), raw);
        assert_eq!(Uuid::from(code), raw);
    }

    #[test]
    fn test_registry_version_next_is_monotonic() {
        let version = RegistryVersion::new(7);

        assert_eq!(version.value(), 7);
        assert_eq!(version.next().value(), 8);
        assert!(version.next() > version);
    }

    #[test]
    fn test_entity_info_has_changes() {
        let info = EntityInfo::new(
            EntityId::new(Uuid::new_v4()),
            TenantCode::new(Uuid::new_v4()),
            change_info(),
            None,
            RegistryVersion::new(1),
        );
        assert!(!info.has_changes());

        let changed = EntityInfo {
            last_changed: Some(change_info()),
            ..info
        };
        assert!(changed.has_changes());
    }

    #[test]
    fn test_value_object_serde_is_transparent() {
        let raw = Uuid::new_v4();
        let json = serde_json::to_string(&EntityId::new(raw)).unwrap();
        assert_eq!(json, format!("\"{}\"", raw));

        let version_json = serde_json::to_string(&RegistryVersion::new(42)).unwrap();
        assert_eq!(version_json, "42");
    }

    #[test]
    fn test_entity_info_serde_round_trip() {
        let info = EntityInfo::new(
            EntityId::new(Uuid::new_v4()),
            TenantCode::new(Uuid::new_v4()),
            change_info(),
            Some(change_info()),
            RegistryVersion::new(3),
        );

        let json = serde_json::to_string(&info).unwrap();
        let deserialized: EntityInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, deserialized);
    }
}
