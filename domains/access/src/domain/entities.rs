//! Domain entities for the Tradewind access control domain
//!
//! Roles bundle claims; the hierarchy relation lets a role inherit another
//! role's claims, and claim dependencies express that granting one claim
//! requires another. None of these carry a status enum; they are pure
//! envelope-plus-fields entities.

use serde::{Deserialize, Serialize};

use tradewind_common::{EntityId, EntityInfo, Error};

/// A named bundle of claims within a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub info: EntityInfo,
    pub name: String,
    pub description: Option<String>,
    /// Built-in roles ship with the platform and cannot be deleted
    pub built_in: bool,
}

impl Role {
    /// Reconstruct a role from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        name: String,
        description: Option<String>,
        built_in: bool,
    ) -> Self {
        Role {
            info,
            name,
            description,
            built_in,
        }
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() || self.name.len() > 100 {
            return Err(Error::Validation(
                "Role name must be 1-100 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// A claim attached to a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleClaim {
    pub info: EntityInfo,
    pub role_id: EntityId,
    pub claim_code: String,
    pub claim_value: String,
}

impl RoleClaim {
    /// Reconstruct a role claim from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        role_id: EntityId,
        claim_code: String,
        claim_value: String,
    ) -> Self {
        RoleClaim {
            info,
            role_id,
            claim_code,
            claim_value,
        }
    }
}

/// Parent-child inheritance between two roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleHierarchy {
    pub info: EntityInfo,
    pub parent_role_id: EntityId,
    pub child_role_id: EntityId,
}

impl RoleHierarchy {
    /// Reconstruct a role hierarchy edge from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        parent_role_id: EntityId,
        child_role_id: EntityId,
    ) -> Self {
        RoleHierarchy {
            info,
            parent_role_id,
            child_role_id,
        }
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<(), Error> {
        if self.parent_role_id == self.child_role_id {
            return Err(Error::Validation(
                "A role cannot inherit from itself".to_string(),
            ));
        }

        Ok(())
    }
}

/// A claim definition registered with the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub info: EntityInfo,
    /// Stable claim code, e.g. "catalog.manage"
    pub code: String,
    pub description: Option<String>,
}

impl Claim {
    /// Reconstruct a claim from previously persisted state
    pub fn from_existing(info: EntityInfo, code: String, description: Option<String>) -> Self {
        Claim {
            info,
            code,
            description,
        }
    }
}

/// Granting `claim_id` requires `depends_on_claim_id` to be granted too
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDependency {
    pub info: EntityInfo,
    pub claim_id: EntityId,
    pub depends_on_claim_id: EntityId,
}

impl ClaimDependency {
    /// Reconstruct a claim dependency from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        claim_id: EntityId,
        depends_on_claim_id: EntityId,
    ) -> Self {
        ClaimDependency {
            info,
            claim_id,
            depends_on_claim_id,
        }
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<(), Error> {
        if self.claim_id == self.depends_on_claim_id {
            return Err(Error::Validation(
                "A claim cannot depend on itself".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};
    use uuid::Uuid;

    fn entity_info() -> EntityInfo {
        EntityInfo::new(
            EntityId::new(Uuid::new_v4()),
            TenantCode::new(Uuid::new_v4()),
            EntityChangeInfo::new(
                "tenant-admin",
                Utc::now(),
                CorrelationId::new(Uuid::new_v4()),
                "api",
                "role.create",
            ),
            None,
            RegistryVersion::new(1),
        )
    }

    #[test]
    fn test_role_validate_name_boundaries() {
        let mut role = Role::from_existing(
            entity_info(),
            "Catalog Manager".to_string(),
            Some("Manages product catalog".to_string()),
            false,
        );
        assert!(role.validate().is_ok());

        role.name = String::new();
        assert!(role.validate().is_err());

        role.name = "a".repeat(101);
        assert!(role.validate().is_err());

        role.name = "a".repeat(100);
        assert!(role.validate().is_ok());
    }

    #[test]
    fn test_role_hierarchy_rejects_self_inheritance() {
        let role_id = EntityId::new(Uuid::new_v4());
        let edge = RoleHierarchy::from_existing(entity_info(), role_id, role_id);
        assert!(edge.validate().is_err());

        let valid = RoleHierarchy::from_existing(
            entity_info(),
            EntityId::new(Uuid::new_v4()),
            EntityId::new(Uuid::new_v4()),
        );
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_claim_dependency_rejects_self_dependency() {
        let claim_id = EntityId::new(Uuid::new_v4());
        let dependency = ClaimDependency::from_existing(entity_info(), claim_id, claim_id);
        assert!(dependency.validate().is_err());
    }

    #[test]
    fn test_role_serde_round_trip() {
        let role = Role::from_existing(entity_info(), "Support Agent".to_string(), None, true);
        let json = serde_json::to_string(&role).unwrap();
        let deserialized: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, deserialized);
    }
}
