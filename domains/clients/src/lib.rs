//! Service client domain: service clients, API keys, DPoP keys

pub mod domain;
pub mod record;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export record types and mapping factories
pub use record::{
    api_key_from_record, dpop_key_from_record, service_client_claim_from_record,
    service_client_from_record, service_client_scope_from_record, ApiKeyRecord, DPoPKeyRecord,
    ServiceClientClaimRecord, ServiceClientRecord, ServiceClientScopeRecord,
};
// Re-export repository types
pub use repository::{ApiKeyRepository, ClientsRepositories, ServiceClientRepository};
