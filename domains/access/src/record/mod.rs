//! Storage records and mapping factories for the access control domain

pub mod claim_dependencies;
pub mod claims;
pub mod role_claims;
pub mod role_hierarchies;
pub mod roles;

pub use claim_dependencies::{claim_dependency_from_record, ClaimDependencyRecord};
pub use claims::{claim_from_record, ClaimRecord};
pub use role_claims::{role_claim_from_record, RoleClaimRecord};
pub use role_hierarchies::{role_hierarchy_from_record, RoleHierarchyRecord};
pub use roles::{role_from_record, RoleRecord};
