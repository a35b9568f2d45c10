//! Storage records and mapping factories for the tenancy domain
//!
//! One module per entity. Each pairs a flat record struct (column-for-column
//! with its table) with the two mapping factories: `From<&Entity>` for the
//! write direction and `entity_from_record` for the read direction.

pub mod consent_terms;
pub mod tenants;
pub mod user_consents;

pub use consent_terms::{consent_term_from_record, ConsentTermRecord};
pub use tenants::{tenant_from_record, TenantRecord};
pub use user_consents::{user_consent_from_record, UserConsentRecord};
