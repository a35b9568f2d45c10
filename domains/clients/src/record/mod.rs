//! Storage records and mapping factories for the service client domain

pub mod api_keys;
pub mod dpop_keys;
pub mod service_client_claims;
pub mod service_client_scopes;
pub mod service_clients;

pub use api_keys::{api_key_from_record, ApiKeyRecord};
pub use dpop_keys::{dpop_key_from_record, DPoPKeyRecord};
pub use service_client_claims::{service_client_claim_from_record, ServiceClientClaimRecord};
pub use service_client_scopes::{service_client_scope_from_record, ServiceClientScopeRecord};
pub use service_clients::{service_client_from_record, ServiceClientRecord};
