//! Role storage record and mapping factories

use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::Role;

/// Flat storage shape of [`Role`], column-for-column with `roles`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RoleRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub name: String,
    pub description: Option<String>,
    pub built_in: bool,
}

impl From<&Role> for RoleRecord {
    fn from(role: &Role) -> Self {
        RoleRecord {
            entity: EntityInfoRecord::from(&role.info),
            name: role.name.clone(),
            description: role.description.clone(),
            built_in: role.built_in,
        }
    }
}

/// Rebuild a [`Role`] from its storage record
pub fn role_from_record(record: RoleRecord) -> Result<Role, MappingError> {
    Ok(Role {
        info: EntityInfo::from_record(record.entity, "Role")?,
        name: record.name,
        description: record.description,
        built_in: record.built_in,
    })
}
