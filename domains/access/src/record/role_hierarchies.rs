//! Role hierarchy storage record and mapping factories

use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::RoleHierarchy;

/// Flat storage shape of [`RoleHierarchy`], column-for-column with `role_hierarchies`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RoleHierarchyRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub parent_role_id: Uuid,
    pub child_role_id: Uuid,
}

impl From<&RoleHierarchy> for RoleHierarchyRecord {
    fn from(edge: &RoleHierarchy) -> Self {
        RoleHierarchyRecord {
            entity: EntityInfoRecord::from(&edge.info),
            parent_role_id: edge.parent_role_id.as_uuid(),
            child_role_id: edge.child_role_id.as_uuid(),
        }
    }
}

/// Rebuild a [`RoleHierarchy`] from its storage record
pub fn role_hierarchy_from_record(
    record: RoleHierarchyRecord,
) -> Result<RoleHierarchy, MappingError> {
    Ok(RoleHierarchy {
        info: EntityInfo::from_record(record.entity, "RoleHierarchy")?,
        parent_role_id: EntityId::new(record.parent_role_id),
        child_role_id: EntityId::new(record.child_role_id),
    })
}
