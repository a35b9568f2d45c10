//! Access control domain: roles, claims, and their relations

pub mod domain;
pub mod record;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export record types and mapping factories
pub use record::{
    claim_dependency_from_record, claim_from_record, role_claim_from_record, role_from_record,
    role_hierarchy_from_record, ClaimDependencyRecord, ClaimRecord, RoleClaimRecord, RoleRecord,
    RoleHierarchyRecord,
};
// Re-export repository types
pub use repository::{AccessRepositories, RoleRepository};
