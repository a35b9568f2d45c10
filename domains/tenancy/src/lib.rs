//! Tenancy domain: tenants, consent terms, user consents

pub mod domain;
pub mod record;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export record types and mapping factories
pub use record::{
    consent_term_from_record, tenant_from_record, user_consent_from_record, ConsentTermRecord,
    TenantRecord, UserConsentRecord,
};
// Re-export repository types
pub use repository::{TenancyRepositories, TenantRepository};
